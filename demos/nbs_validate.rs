use ips_qr::core::*;
use ips_qr::nbs::*;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "ips_qr=debug".into()))
        .init();

    // IPS_QR_NBS_URL / IPS_QR_NBS_TIMEOUT_SECS override the defaults
    let client = NbsClient::new(NbsConfig::from_env()?)?;
    println!("Using {}", client.config().base_url);

    let payment = IpsPaymentBuilder::new(
        PaymentKind::PrintedBill,
        "160-5000000000005-62",
        "JP EPS Beograd",
        "189",
    )
    .amount(dec!(3596.13))
    .purpose("Uplata po računu")
    .build()?;

    let result = client.validate_payment_remote(&payment).await?;
    println!(
        "NBS: valid={} code={} ({})",
        result.valid, result.code, result.description
    );
    for e in &result.errors {
        println!("  - {e}");
    }

    if result.valid {
        let png = client.generate_for_payment(&payment, Some(400)).await?;
        std::fs::write("ips-qr.png", &png)?;
        println!("Wrote ips-qr.png ({} bytes)", png.len());
    }

    // Local validation stops bad payments before any request
    let mut bad = payment.clone();
    bad.receiver_account = "160500000000000563".into();
    if let Err(e) = client.validate_payment_remote(&bad).await {
        println!("Rejected locally: {e}");
    }

    Ok(())
}
