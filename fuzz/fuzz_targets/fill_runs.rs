#![no_main]
use libfuzzer_sys::fuzz_target;

use mjrtp_check::{scan_with, StreamState};

fn quiet_scan(data: &[u8]) -> StreamState {
    let mut state = StreamState::new();
    scan_with(data, &mut state, &mut ());
    state
}

fuzz_target!(|data: &[u8]| {
    let padded: Vec<u8> = data
        .iter()
        .flat_map(|&b| if b == 0xFF { vec![0xFF, 0xFF] } else { vec![b] })
        .collect();
    assert_eq!(quiet_scan(data), quiet_scan(&padded));
});
