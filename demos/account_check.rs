use ips_qr::core::*;

fn main() {
    // Check-digit validation (no network required)
    println!("=== Account Check Digits ===\n");

    let accounts = [
        "160-5000000000005-62",
        "160 5000000000005 62",
        "000000000000000197",
        "999-9999999999938-98", // body divisible by 97
        "160-5000000000005-63", // wrong check digits
        "160-5000000000005-99", // 99 can never be valid
        "160-12345",            // too short
    ];

    for raw in &accounts {
        let verdict = if is_valid_account(raw) { "valid" } else { "INVALID" };
        println!("  {raw:<24} => {verdict:<8} display: {}", format_account(raw));
    }

    println!("\n=== Strong Type ===\n");

    for raw in &accounts {
        match AccountNumber::parse(raw) {
            Ok(acc) => println!(
                "  {raw:<24} => bank {}, check digits {:02}",
                acc.bank_code(),
                acc.check_digits()
            ),
            Err(e) => println!("  {raw:<24} => {e}"),
        }
    }

    println!("\n=== Computing Check Digits ===\n");

    for (bank, account) in [("160", "5"), ("265", "1234567"), ("908", "9999999999999")] {
        if let Some(acc) = AccountNumber::from_parts(bank, account) {
            println!("  bank {bank}, account {account:>13} => {acc}");
        }
    }
}
