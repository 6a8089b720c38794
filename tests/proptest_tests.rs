//! Property-based tests for account check digits and payloads.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "payload")]

use ips_qr::core::*;
use ips_qr::payload::{parse_payload, render_payload};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Any 16-digit account body, leading zeros included.
fn arb_body() -> impl Strategy<Value = String> {
    "[0-9]{16}"
}

/// A valid canonical account number.
fn arb_valid_account() -> impl Strategy<Value = String> {
    arb_body().prop_map(|body| {
        let check = compute_check_digits(&body).unwrap();
        format!("{body}{check:02}")
    })
}

/// Separators people type between digit groups.
fn arb_separator() -> impl Strategy<Value = String> {
    "[ \\-/.\\tA-Za-z]{0,2}"
}

/// Amount in RSD with two decimals (0.01 to 9 999 999.99).
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|para| Decimal::new(para, 2))
}

/// Printable text without the payload separator or surrounding blanks.
fn arb_text(max: usize) -> impl Strategy<Value = String> {
    let pattern = format!(
        "[A-Za-z0-9čćžšđČĆŽŠĐ][A-Za-z0-9čćžšđ .,:-]{{0,{}}}[A-Za-z0-9]",
        max - 2
    );
    proptest::string::string_regex(&pattern).expect("valid regex")
}

// ── Account properties ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn deterministic(s in ".{0,40}") {
        prop_assert_eq!(is_valid_account(&s), is_valid_account(&s));
        prop_assert_eq!(format_account(&s), format_account(&s));
    }

    #[test]
    fn digit_count_gate(s in ".{0,40}") {
        let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
        prop_assume!(digits != 18);
        prop_assert!(!is_valid_account(&s));
        prop_assert_eq!(format_account(&s), s);
    }

    #[test]
    fn computed_check_digits_validate(account in arb_valid_account()) {
        prop_assert!(is_valid_account(&account));
        prop_assert!(AccountNumber::parse(&account).is_ok());
    }

    #[test]
    fn exactly_one_check_value_per_body(body in arb_body()) {
        let valid: Vec<u8> = (0..=99u8)
            .filter(|c| is_valid_account(&format!("{body}{c:02}")))
            .collect();
        prop_assert_eq!(valid.len(), 1);
        prop_assert!((2..=98).contains(&valid[0]));
    }

    #[test]
    fn check_value_matches_u128_arithmetic(body in arb_body()) {
        let n: u128 = body.parse().unwrap();
        let expected = (98 - n % 97) as u8;
        prop_assert_eq!(compute_check_digits(&body), Some(expected));
    }

    #[test]
    fn separators_do_not_change_result(
        account in prop_oneof![arb_valid_account(), "[0-9]{18}"],
        sep1 in arb_separator(),
        sep2 in arb_separator(),
    ) {
        let noisy = format!("{sep1}{}{sep2}{}{sep1}{}", &account[..3], &account[3..16], &account[16..]);
        prop_assert_eq!(is_valid_account(&noisy), is_valid_account(&account));
    }

    #[test]
    fn format_idempotent(account in "[0-9]{18}") {
        let once = format_account(&account);
        prop_assert_eq!(once.len(), 20);
        let stripped: String = once.chars().filter(|c| *c != '-').collect();
        prop_assert_eq!(&stripped, &account);
        prop_assert_eq!(format_account(&stripped), once.clone());
        prop_assert_eq!(format_account(&once), once);
    }
}

// ── Payload properties ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn render_parse_round_trip(
        account in arb_valid_account(),
        name in arb_text(70),
        amount in proptest::option::of(arb_amount()),
        purpose in proptest::option::of(arb_text(35)),
        payer_ref in proptest::option::of(arb_text(40)),
        pad in " {0,2}",
        code in "[12][0-9]{2}",
    ) {
        let mut builder = IpsPaymentBuilder::new(PaymentKind::PrintedBill, &account, name, code);
        if let Some(a) = amount {
            builder = builder.amount(a);
        }
        if let Some(p) = purpose {
            builder = builder.purpose(p);
        }
        // RL is the last tag, so trailing blanks end the payload.
        if let Some(r) = payer_ref {
            builder = builder.payer_reference(format!("{r}{pad}"));
        }
        let payment = builder.build().unwrap();
        let text = render_payload(&payment).unwrap();
        prop_assert_eq!(parse_payload(&text).unwrap(), payment);
    }

    #[test]
    fn three_decimal_amounts_never_build(para in 1i64..1_000_000_000i64, extra in 1i64..10) {
        let value = Decimal::new(para * 10 + extra, 3);
        let built = IpsPaymentBuilder::new(PaymentKind::PrintedBill, "160500000000000562", "EPS", "189")
            .amount(value)
            .build();
        prop_assert!(built.is_err());
    }

    #[test]
    fn parser_never_panics(s in ".{0,200}") {
        let _ = parse_payload(&s);
    }

    #[test]
    fn model_97_references_validate(body in "[0-9A-Z]{1,20}") {
        let reference = PaymentReference::model_97(&body).unwrap();
        prop_assert!(reference.is_valid());
        prop_assert!(validate_reference("97", &reference.number));
    }
}
