use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::reference::PaymentReference;

/// IPS payload version (tag `V`).
pub const IPS_VERSION: &str = "01";

/// Character set marker (tag `C`); `1` means UTF-8.
pub const IPS_CHARSET: &str = "1";

/// An IPS QR payment, one field per IPS tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpsPayment {
    /// K: Identification code.
    pub kind: PaymentKind,
    /// R: Receiver account, 18 digits without separators.
    pub receiver_account: String,
    /// N: Receiver name and address, up to three lines.
    pub receiver_name: String,
    /// I: Amount and currency.
    pub amount: Option<Amount>,
    /// P: Payer name and address, up to three lines.
    pub payer: Option<String>,
    /// SF: Payment code (šifra plaćanja).
    pub payment_code: String,
    /// S: Purpose of payment.
    pub purpose: Option<String>,
    /// M: Merchant category code (ISO 18245).
    pub merchant_category: Option<String>,
    /// JS: One-time code shown by the payer's app.
    pub one_time_code: Option<String>,
    /// RO: Receiver's reference (model + number).
    pub reference: Option<PaymentReference>,
    /// RL: Payer's reference.
    pub payer_reference: Option<String>,
}

/// IPS identification code (tag `K`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentKind {
    /// `PR`: printed bill / invoice.
    PrintedBill,
    /// `PT`: merchant-presented code at a point of sale.
    MerchantPresented,
    /// `PK`: payer-presented code at a point of sale.
    PayerPresented,
    /// `EK`: e-commerce.
    ECommerce,
}

impl PaymentKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::PrintedBill => "PR",
            Self::MerchantPresented => "PT",
            Self::PayerPresented => "PK",
            Self::ECommerce => "EK",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PR" => Some(Self::PrintedBill),
            "PT" => Some(Self::MerchantPresented),
            "PK" => Some(Self::PayerPresented),
            "EK" => Some(Self::ECommerce),
            _ => None,
        }
    }

    /// Point-of-sale and e-commerce codes need a merchant category and amount.
    pub fn is_merchant(&self) -> bool {
        !matches!(self, Self::PrintedBill)
    }
}

impl IpsPayment {
    /// The receiver account in `XXX-XXXXXXXXXXXXX-XX` display form.
    pub fn receiver_account_display(&self) -> String {
        super::account::format_account(&self.receiver_account)
    }
}
