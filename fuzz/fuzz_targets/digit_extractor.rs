#![no_main]

use benford::{analyze, extract_digit, Mode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string (lossy conversion)
    if let Ok(input) = std::str::from_utf8(data) {
        // Mode parsing must never panic
        let _ = input.parse::<Mode>();

        for mode in Mode::ALL {
            if let Some(value) = extract_digit(input, mode) {
                assert!(mode.domain().contains(&value));
            }
        }

        let tokens: Vec<&str> = input.split_whitespace().collect();
        let _ = analyze(&tokens, Mode::FirstTwoDigits);
    }
});
