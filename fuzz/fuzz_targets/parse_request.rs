#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((selector, payload)) = data.split_first() else {
        return;
    };
    if let Ok(input) = std::str::from_utf8(payload) {
        let last_line_body = selector % 2 == 1;
        if let Ok(request) = snipe::fuzzing::parse_request_input(input, last_line_body) {
            debug_assert!(!request.method.is_empty());
            debug_assert!(!request.path.is_empty());
            let reparsed = snipe::fuzzing::reparse_request(&request);
            debug_assert_eq!(reparsed.as_ref().ok(), Some(&request));
        }
    }
});
