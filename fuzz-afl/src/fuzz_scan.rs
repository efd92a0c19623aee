use afl::fuzz;

use mjrtp_check::{check_window, Config};

fn main() {
    fuzz!(|data: &[u8]| {
        let _ = check_window(data, &Config::default());
    });
}
