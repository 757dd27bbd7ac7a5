//! Execution outcome reported for a submitted parcel or transaction.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvoiceOutcome {
    Success,
    Failed,
}

impl fmt::Display for InvoiceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceOutcome::Success => f.write_str("Success"),
            InvoiceOutcome::Failed => f.write_str("Failed"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Invoice {
    outcome: InvoiceOutcome,
}

impl Invoice {
    pub fn new(outcome: InvoiceOutcome) -> Self {
        Self { outcome }
    }

    pub fn success() -> Self {
        Self::new(InvoiceOutcome::Success)
    }

    pub fn failed() -> Self {
        Self::new(InvoiceOutcome::Failed)
    }

    pub fn outcome(&self) -> InvoiceOutcome {
        self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome == InvoiceOutcome::Success
    }
}

impl From<InvoiceOutcome> for Invoice {
    fn from(outcome: InvoiceOutcome) -> Self {
        Self::new(outcome)
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invoice({})", self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome() {
        assert!(Invoice::success().is_success());
        assert!(!Invoice::failed().is_success());
        assert_eq!(Invoice::from(InvoiceOutcome::Failed), Invoice::failed());
        assert_eq!(Invoice::success().to_string(), "Invoice(Success)");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_wire_form() {
        let invoice: Invoice = serde_json::from_str(r#"{"outcome":"Success"}"#).unwrap();
        assert!(invoice.is_success());
        assert_eq!(serde_json::to_string(&Invoice::failed()).unwrap(), r#"{"outcome":"Failed"}"#);
        assert!(serde_json::from_str::<Invoice>(r#"{"outcome":"success"}"#).is_err());
        assert!(serde_json::from_str::<Invoice>("{}").is_err());
    }
}
