use mjrtp_check::{check_window, Config};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        println!("Usage: {} <path-to-crash>", args[0]);
        std::process::exit(1);
    }

    let data = std::fs::read(&args[1]).expect(&format!("Could not open file {}", args[1]));
    let report = check_window(&data, &Config::default());
    println!("Scanned {} bytes: {:?}", report.bytes_read, report.state);
}
