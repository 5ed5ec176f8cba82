#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(decoded) = itty_codec::decode(input) {
            assert!(decoded.document.len() <= itty_codec::MAX_DECODED_SIZE);
        }
    }
});
