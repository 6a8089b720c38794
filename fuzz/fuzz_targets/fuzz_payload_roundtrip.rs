#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Ok(payment) = ips_qr::payload::parse_payload(s) else {
            return;
        };
        // Anything that parses and validates must render and parse back identically.
        if let Ok(text) = ips_qr::payload::render_payload(&payment) {
            let reparsed = ips_qr::payload::parse_payload(&text).expect("rendered payload must parse");
            assert_eq!(reparsed, payment);
        }
    }
});
