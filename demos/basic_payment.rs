use ips_qr::core::*;
use ips_qr::payload;
use rust_decimal_macros::dec;

fn main() {
    println!("=== Printed Bill (PR) ===\n");

    let bill = IpsPaymentBuilder::new(
        PaymentKind::PrintedBill,
        "160-5000000000005-62",
        "JP EPS Beograd\r\nBalkanska 13",
        "189",
    )
    .amount(dec!(3596.13))
    .payer("Pera Perić\r\nKneza Miloša 1")
    .purpose("Uplata po računu")
    .reference_97("2024001")
    .and_then(|b| b.build());

    let bill = match bill {
        Ok(p) => p,
        Err(e) => {
            eprintln!("  Build failed: {e}");
            return;
        }
    };

    println!("  Receiver: {}", bill.receiver_account_display());
    match payload::render_payload(&bill) {
        Ok(text) => {
            println!("  Payload:  {}", text.replace("\r\n", "\\r\\n"));
            let parsed = payload::parse_payload(&text).expect("rendered payload parses");
            println!("  Parsed back identical: {}", parsed == bill);
        }
        Err(e) => println!("  Render failed: {e}"),
    }

    println!("\n=== Validation Errors ===\n");

    let broken = IpsPaymentBuilder::new(PaymentKind::ECommerce, "160-5000000000005-63", "", "389")
        .purpose("x".repeat(40))
        .build_unchecked();

    for e in validate_payment(&broken) {
        println!("  {e}");
    }

    println!("\n=== Payment Codes ===\n");

    for code in ["189", "221", "253", "389"] {
        let form = payment_codes::payment_form(code)
            .map(|f| format!("{f:?}"))
            .unwrap_or_else(|| "invalid".into());
        println!(
            "  {code} => {form}, {}",
            payment_codes::describe(code).unwrap_or("—")
        );
    }
}
