use crate::core::*;

use super::{FIELD_SEPARATOR, MANDATORY_TAGS, TAG_ORDER, TAG_SEPARATOR};

fn payload_err(msg: impl Into<String>) -> IpsError {
    IpsError::Payload(msg.into())
}

fn value_of<'a>(values: &[Option<&'a str>], tag: &str) -> Option<&'a str> {
    TAG_ORDER
        .iter()
        .position(|t| *t == tag)
        .and_then(|i| values[i])
}

/// Parse IPS QR payload text into an [`IpsPayment`].
///
/// Checks structure only: known tags, tag order, no duplicates, mandatory
/// tags present, fixed `V`/`C` values. Business rules (check digits,
/// lengths) are left to [`validate_payment`].
pub fn parse_payload(text: &str) -> Result<IpsPayment, IpsError> {
    // Trailing blanks belong to the last value; only a line terminator is dropped.
    let text = text.trim_start();
    let text = text
        .strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text);
    if text.is_empty() {
        return Err(payload_err("payload is empty"));
    }

    let mut values: [Option<&str>; TAG_ORDER.len()] = [None; TAG_ORDER.len()];
    let mut last_index: Option<usize> = None;

    for segment in text.split(FIELD_SEPARATOR) {
        let (tag, value) = segment
            .split_once(TAG_SEPARATOR)
            .ok_or_else(|| payload_err(format!("field '{segment}' has no tag separator")))?;
        let index = TAG_ORDER
            .iter()
            .position(|t| *t == tag)
            .ok_or_else(|| payload_err(format!("unknown tag '{tag}'")))?;

        if values[index].is_some() {
            return Err(payload_err(format!("duplicate tag '{tag}'")));
        }
        if let Some(last) = last_index {
            if index < last {
                return Err(payload_err(format!(
                    "tag '{tag}' must come before '{}'",
                    TAG_ORDER[last]
                )));
            }
        }
        values[index] = Some(value);
        last_index = Some(index);
    }

    let get = |tag: &str| value_of(&values, tag);

    for &tag in MANDATORY_TAGS {
        if get(tag).is_none() {
            return Err(payload_err(format!("mandatory tag '{tag}' is missing")));
        }
    }

    let kind_code = get("K").unwrap_or_default();
    let kind = PaymentKind::from_code(kind_code)
        .ok_or_else(|| payload_err(format!("unknown identification code '{kind_code}'")))?;

    let version = get("V").unwrap_or_default();
    if version != IPS_VERSION {
        return Err(payload_err(format!(
            "unsupported version '{version}', expected '{IPS_VERSION}'"
        )));
    }
    let charset = get("C").unwrap_or_default();
    if charset != IPS_CHARSET {
        return Err(payload_err(format!(
            "unsupported character set '{charset}', expected '{IPS_CHARSET}'"
        )));
    }

    let amount = get("I").map(str::parse::<Amount>).transpose()?;
    let reference = get("RO")
        .map(|v| {
            PaymentReference::split(v)
                .ok_or_else(|| payload_err(format!("reference '{v}' has no model")))
        })
        .transpose()?;

    let owned = |tag: &str| get(tag).map(str::to_string);

    Ok(IpsPayment {
        kind,
        receiver_account: get("R").unwrap_or_default().to_string(),
        receiver_name: get("N").unwrap_or_default().to_string(),
        amount,
        payer: owned("P"),
        payment_code: get("SF").unwrap_or_default().to_string(),
        purpose: owned("S"),
        merchant_category: owned("M"),
        one_time_code: owned("JS"),
        reference,
        payer_reference: owned("RL"),
    })
}
