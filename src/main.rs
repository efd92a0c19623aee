//! `mjrtpc`: checks the JPEG marker structure of motion-JPEG files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use mjrtp_check::{check_paths, hex_bytes, CheckReport, Config, Error, DEFAULT_WINDOW_SIZE};

#[derive(Parser, Debug)]
#[command(name = "mjrtpc", version)]
#[command(about = "Check that MJPEG, AVI or MOV files contain well-formed JPEG marker sequences")]
struct Args {
    /// Files to check (.mjpeg, .mjpg, .avi or .mov)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of bytes scanned from the start of each file
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
    window_size: usize,

    /// Also fail when an image is still open at the end of the window
    #[arg(long)]
    strict: bool,

    /// Print marker statistics for every file
    #[arg(long)]
    stats: bool,

    /// Log frame headers (-v) and read details (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print failures
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn print_stats(report: &CheckReport) {
    let state = &report.state;
    if let Some(container) = report.container {
        println!("  container:       {}", container);
    }
    println!("  bytes scanned:   {}", report.bytes_read);
    println!("  images:          {}{}", report.frames, if report.truncated { " (+1 truncated)" } else { "" });
    println!("  open SOI:        {}", state.open_starts);
    println!("  frame headers:   {}", state.frame_header_count);
    println!("  DQT/DHT/DRI:     {}/{}/{}", state.quantization_tables, state.huffman_tables, state.restart_intervals);
    println!("  SOS/RST:         {}/{}", state.scans, state.restarts);
    println!("  unclassified:    {}", state.unclassified);
    if let Some(opcode) = state.error {
        println!("  error:           {} without SOI", hex_bytes(&[0xFF, opcode]));
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config {
        window_size: args.window_size,
        strict: args.strict,
    };
    let prefix = |path: &PathBuf| {
        if args.files.len() > 1 { format!("{}: ", path.display()) } else { String::new() }
    };

    let mut failed = false;
    for (path, result) in check_paths(&args.files, &config) {
        if let Ok(report) = &result {
            if report.bytes_read < config.window_size && !args.quiet {
                println!("{}{} bytes read", prefix(&path), report.bytes_read);
            }
        }
        match result {
            Ok(report) if report.is_valid() => {
                if !args.quiet {
                    println!("{}ok", prefix(&path));
                }
                if args.stats {
                    print_stats(&report);
                }
            },
            Ok(report) => {
                failed = true;
                println!("{}jfif invalid", prefix(&path));
                if args.stats {
                    print_stats(&report);
                }
            },
            Err(Error::UnsupportedContainer(_)) => {
                failed = true;
                println!("{}file invalid", prefix(&path));
            },
            Err(err) => {
                failed = true;
                println!("{}file could not be opened: {}", prefix(&path), err);
            },
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
