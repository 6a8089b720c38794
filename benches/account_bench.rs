use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use ips_qr::core::*;
use ips_qr::payload;

fn build_payment() -> IpsPayment {
    IpsPaymentBuilder::new(
        PaymentKind::PrintedBill,
        "160-5000000000005-62",
        "JP EPS Beograd\r\nBalkanska 13",
        "189",
    )
    .amount(dec!(3596.13))
    .payer("Pera Perić")
    .purpose("Uplata po računu")
    .reference("97", "2012345")
    .build()
    .unwrap()
}

fn bench_account(c: &mut Criterion) {
    c.bench_function("is_valid_account_clean", |b| {
        b.iter(|| black_box(is_valid_account(black_box("160500000000000562"))));
    });
    c.bench_function("is_valid_account_dashed", |b| {
        b.iter(|| black_box(is_valid_account(black_box("160-5000000000005-62"))));
    });
    c.bench_function("format_account", |b| {
        b.iter(|| black_box(format_account(black_box("160500000000000562"))));
    });
}

fn bench_payload(c: &mut Criterion) {
    let payment = build_payment();
    c.bench_function("validate_payment", |b| {
        b.iter(|| black_box(validate_payment(black_box(&payment))));
    });
    c.bench_function("render_payload", |b| {
        b.iter(|| black_box(payload::render_payload(black_box(&payment))));
    });

    let text = payload::render_payload(&payment).unwrap();
    c.bench_function("parse_payload", |b| {
        b.iter(|| black_box(payload::parse_payload(black_box(&text))));
    });
}

criterion_group!(benches, bench_account, bench_payload);
criterion_main!(benches);
