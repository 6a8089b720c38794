use rust_decimal::Decimal;

use super::amount::Amount;
use super::error::IpsError;
use super::reference::PaymentReference;
use super::types::*;
use super::validation;

/// Builder for constructing valid IPS payments.
///
/// ```
/// use ips_qr::core::*;
/// use rust_decimal_macros::dec;
///
/// let payment = IpsPaymentBuilder::new(
///     PaymentKind::PrintedBill,
///     "160-5000000000005-62",
///     "JP EPS Beograd\r\nBalkanska 13",
///     "189",
/// )
/// .amount(dec!(3596.13))
/// .purpose("Uplata po računu")
/// .reference("97", "2012345")
/// .build()
/// .unwrap();
///
/// assert_eq!(payment.receiver_account, "160500000000000562");
/// ```
pub struct IpsPaymentBuilder {
    kind: PaymentKind,
    receiver_account: String,
    receiver_name: String,
    amount: Option<Amount>,
    payer: Option<String>,
    payment_code: String,
    purpose: Option<String>,
    merchant_category: Option<String>,
    one_time_code: Option<String>,
    reference: Option<PaymentReference>,
    payer_reference: Option<String>,
}

impl IpsPaymentBuilder {
    /// Start a payment with the tags every IPS code needs.
    ///
    /// Separators in `receiver_account` are stripped.
    pub fn new(
        kind: PaymentKind,
        receiver_account: &str,
        receiver_name: impl Into<String>,
        payment_code: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            receiver_account: receiver_account
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect(),
            receiver_name: receiver_name.into(),
            amount: None,
            payer: None,
            payment_code: payment_code.into(),
            purpose: None,
            merchant_category: None,
            one_time_code: None,
            reference: None,
            payer_reference: None,
        }
    }

    /// Amount in RSD.
    pub fn amount(mut self, value: Decimal) -> Self {
        self.amount = Some(Amount::rsd(value));
        self
    }

    pub fn amount_in(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn payer(mut self, payer: impl Into<String>) -> Self {
        self.payer = Some(payer.into());
        self
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    pub fn merchant_category(mut self, mcc: impl Into<String>) -> Self {
        self.merchant_category = Some(mcc.into());
        self
    }

    pub fn one_time_code(mut self, code: impl Into<String>) -> Self {
        self.one_time_code = Some(code.into());
        self
    }

    pub fn reference(mut self, model: impl Into<String>, number: impl Into<String>) -> Self {
        self.reference = Some(PaymentReference::new(model, number));
        self
    }

    /// Model 97 reference with control digits computed from `body`.
    pub fn reference_97(mut self, body: &str) -> Result<Self, IpsError> {
        let reference = PaymentReference::model_97(body).ok_or_else(|| {
            IpsError::Builder(format!("'{body}' cannot be used as a model 97 reference"))
        })?;
        self.reference = Some(reference);
        Ok(self)
    }

    pub fn payer_reference(mut self, reference: impl Into<String>) -> Self {
        self.payer_reference = Some(reference.into());
        self
    }

    /// Build the payment and run validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<IpsPayment, IpsError> {
        let payment = self.build_unchecked();

        let errors = validation::validate_payment(&payment);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(IpsError::Validation(msg));
        }

        Ok(payment)
    }

    /// Build without validation, for testing or importing external data.
    pub fn build_unchecked(self) -> IpsPayment {
        IpsPayment {
            kind: self.kind,
            receiver_account: self.receiver_account,
            receiver_name: self.receiver_name,
            amount: self.amount,
            payer: self.payer,
            payment_code: self.payment_code,
            purpose: self.purpose,
            merchant_category: self.merchant_category,
            one_time_code: self.one_time_code,
            reference: self.reference,
            payer_reference: self.payer_reference,
        }
    }
}
