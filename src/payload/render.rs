use crate::core::*;

use super::{FIELD_SEPARATOR, TAG_SEPARATOR};

struct PayloadWriter {
    buf: String,
}

impl PayloadWriter {
    fn new() -> Self {
        Self { buf: String::new() }
    }

    fn field(&mut self, tag: &str, value: &str) -> &mut Self {
        if !self.buf.is_empty() {
            self.buf.push(FIELD_SEPARATOR);
        }
        self.buf.push_str(tag);
        self.buf.push(TAG_SEPARATOR);
        self.buf.push_str(value);
        self
    }

    fn opt_field(&mut self, tag: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            self.field(tag, v);
        }
        self
    }

    fn into_string(self) -> String {
        self.buf
    }
}

/// Render a payment as IPS QR payload text.
///
/// The payment is validated first; on failure all validation messages are
/// returned in [`IpsError::Validation`]. Absent optional tags are omitted.
pub fn render_payload(payment: &IpsPayment) -> Result<String, IpsError> {
    let errors = validate_payment(payment);
    if !errors.is_empty() {
        let msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(IpsError::Validation(msg));
    }

    let amount = payment.amount.as_ref().map(|a| a.to_string());
    let reference = payment.reference.as_ref().map(|r| r.to_string());

    let mut w = PayloadWriter::new();
    w.field("K", payment.kind.code())
        .field("V", IPS_VERSION)
        .field("C", IPS_CHARSET)
        .field("R", &payment.receiver_account)
        .field("N", &payment.receiver_name)
        .opt_field("I", amount.as_deref())
        .opt_field("P", payment.payer.as_deref())
        .field("SF", &payment.payment_code)
        .opt_field("S", payment.purpose.as_deref())
        .opt_field("M", payment.merchant_category.as_deref())
        .opt_field("JS", payment.one_time_code.as_deref())
        .opt_field("RO", reference.as_deref())
        .opt_field("RL", payment.payer_reference.as_deref());

    Ok(w.into_string())
}
