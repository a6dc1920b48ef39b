use serde::{Deserialize, Serialize};

use super::Dimension;

/// How the order was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    PayPal,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl Dimension for PaymentMethod {
    const COLUMN: &'static str = "Payment Method";
    const VALUES: &'static [Self] = &[
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::BankTransfer,
        PaymentMethod::CashOnDelivery,
    ];

    fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_labels() {
        assert_eq!(
            PaymentMethod::sorted_labels(),
            vec!["Bank Transfer", "Cash on Delivery", "Credit Card", "PayPal"]
        );
    }
}
