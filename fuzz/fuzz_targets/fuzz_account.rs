#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let valid = ips_qr::is_valid_account(s);
        let formatted = ips_qr::format_account(s);
        // Formatting never changes the validation result.
        assert_eq!(ips_qr::is_valid_account(&formatted), valid);
        assert_eq!(ips_qr::AccountNumber::parse(s).is_ok(), valid);
    }
});
