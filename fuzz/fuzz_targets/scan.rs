#![no_main]
use libfuzzer_sys::fuzz_target;

use mjrtp_check::{scan_with, Frames, MarkerCategory, Markers, StreamState};

fuzz_target!(|data: &[u8]| {
    let mut state = StreamState::new();
    scan_with(data, &mut state, &mut ());

    let mut soi = 0;
    let mut last = None;
    for hit in Markers::new(data) {
        assert!(hit.offset + 1 < data.len());
        assert_eq!(data[hit.offset], 0xFF);
        assert_ne!(hit.opcode, 0xFF);
        if let Some(previous) = last {
            assert!(hit.offset >= previous + 2);
        }
        last = Some(hit.offset);
        if hit.category == MarkerCategory::StartOfImage {
            soi += 1;
        }
    }
    assert!(state.open_starts <= soi);

    let frames: Vec<_> = Frames::new(data).collect();
    for frame in &frames {
        assert_eq!(&data[frame.start..frame.start + 2], &[0xFF, 0xD8]);
        assert_eq!(&data[frame.end - 2..frame.end], &[0xFF, 0xD9]);
    }
    assert!(frames.windows(2).all(|w| w[0].end <= w[1].start));
});
