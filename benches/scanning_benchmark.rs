use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mjrtp_check::{check_window, scan_with, Config, Frames, StreamState};

fn scan_quietly(window: &[u8]) -> StreamState {
    let mut state = StreamState::new();
    scan_with(black_box(window), &mut state, &mut ());
    state
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("scan an AVI with two images", |b| b.iter(|| {
        scan_quietly(include_bytes!("../tests/fixtures/valid/two_frames.avi"))
    }));

    c.bench_function("scan a window of fill bytes", |b| b.iter(|| {
        scan_quietly(include_bytes!("../tests/crashtest/all_prefix.avi"))
    }));

    c.bench_function("split images", |b| b.iter(|| {
        Frames::new(black_box(include_bytes!("../tests/fixtures/valid/stuffed.MJPG"))).count()
    }));

    c.bench_function("check a window with diagnostics", |b| b.iter(|| {
        check_window(black_box(include_bytes!("../tests/crashtest/every_opcode.mjpeg")), &Config::default())
    }));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
