//! Tuition invoices: status labels, issuing rules and per-invoice valuation.

use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use debtdesk_core::{DomainError, DomainResult, Entity, InvoiceId, Money};

use crate::valuation::{DebtValuation, PenaltyPolicy};

/// Largest invoice value accepted (10^15). Keeps every valuation far from
/// decimal overflow.
pub const MAX_INVOICE_VALUE: Decimal =
    Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Boundary check for an invoice value: positive, whole cents, at most
/// [`MAX_INVOICE_VALUE`].
pub fn validate_value(value: Money) -> DomainResult<Money> {
    if !value.is_positive() {
        return Err(DomainError::validation("invoice value must be positive"));
    }
    if !value.has_cent_precision() {
        return Err(DomainError::validation(
            "invoice value must not have more than 2 decimal places",
        ));
    }
    if value.amount() > MAX_INVOICE_VALUE {
        return Err(DomainError::validation(format!(
            "invoice value must not exceed {MAX_INVOICE_VALUE}"
        )));
    }
    Ok(value)
}

/// Invoice status as recorded by the school.
///
/// Parsed case-insensitively from the English names or the Portuguese labels
/// used by schools (`PAGO`, `PENDENTE`, `VENCIDO`). Always serialized in
/// English upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Pending => "PENDING",
            InvoiceStatus::Overdue => "OVERDUE",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PAID" | "PAGO" => Ok(InvoiceStatus::Paid),
            "PENDING" | "PENDENTE" => Ok(InvoiceStatus::Pending),
            "OVERDUE" | "VENCIDO" => Ok(InvoiceStatus::Overdue),
            _ => Err(DomainError::unknown_status(s)),
        }
    }
}

impl TryFrom<String> for InvoiceStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Command: IssueInvoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueInvoice {
    pub invoice_id: InvoiceId,
    pub guardian: Option<String>,
    pub student: Option<String>,
    pub description: Option<String>,
    pub value: Money,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
}

/// Tuition invoice owed by a guardian.
///
/// `value` is fixed once issued; only the status moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    guardian: Option<String>,
    student: Option<String>,
    description: Option<String>,
    value: Money,
    due_date: NaiveDate,
    status: InvoiceStatus,
}

impl Invoice {
    /// Validate and build an invoice (see [`validate_value`]).
    pub fn issue(cmd: IssueInvoice) -> DomainResult<Self> {
        let value = validate_value(cmd.value)?;

        Ok(Self {
            id: cmd.invoice_id,
            guardian: cmd.guardian,
            student: cmd.student,
            description: cmd.description,
            value,
            due_date: cmd.due_date,
            status: cmd.status,
        })
    }

    pub fn guardian(&self) -> Option<&str> {
        self.guardian.as_deref()
    }

    pub fn student(&self) -> Option<&str> {
        self.student.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn value(&self) -> Money {
        self.value
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    /// Idempotent.
    pub fn mark_paid(&mut self) {
        self.status = InvoiceStatus::Paid;
    }

    /// Unpaid and strictly past its due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != InvoiceStatus::Paid && today > self.due_date
    }

    /// Status to display on `today`: a pending invoice past its due date
    /// reads as overdue.
    pub fn effective_status(&self, today: NaiveDate) -> InvoiceStatus {
        match self.status {
            InvoiceStatus::Paid => InvoiceStatus::Paid,
            _ if self.is_overdue(today) => InvoiceStatus::Overdue,
            other => other,
        }
    }

    /// Valuation under the standard penalty policy.
    pub fn valuation(&self, now: NaiveDate) -> DebtValuation {
        self.valuation_with(&PenaltyPolicy::default(), now)
    }

    pub fn valuation_with(&self, policy: &PenaltyPolicy, now: NaiveDate) -> DebtValuation {
        policy.value(self.value, self.due_date, self.status, now)
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn issue_cmd(value: &str, status: InvoiceStatus) -> IssueInvoice {
        IssueInvoice {
            invoice_id: InvoiceId::new(),
            guardian: Some("Maria Souza".to_string()),
            student: Some("Lucas Souza".to_string()),
            description: Some("Tuition 2024/01".to_string()),
            value: Money::new(value.parse().unwrap()),
            due_date: date(2024, 1, 10),
            status,
        }
    }

    #[test]
    fn issue_invoice_keeps_command_fields() {
        let cmd = issue_cmd("1000", InvoiceStatus::Pending);
        let invoice = Invoice::issue(cmd.clone()).unwrap();
        assert_eq!(invoice.id(), &cmd.invoice_id);
        assert_eq!(invoice.guardian(), Some("Maria Souza"));
        assert_eq!(invoice.student(), Some("Lucas Souza"));
        assert_eq!(invoice.value(), cmd.value);
        assert_eq!(invoice.due_date(), date(2024, 1, 10));
        assert_eq!(invoice.status(), InvoiceStatus::Pending);
    }

    #[test]
    fn cannot_issue_non_positive_invoice() {
        for value in ["0", "-10.00"] {
            let err = Invoice::issue(issue_cmd(value, InvoiceStatus::Pending)).unwrap_err();
            match err {
                DomainError::Validation(msg) if msg.contains("must be positive") => {}
                _ => panic!("Expected Validation error for value {value}"),
            }
        }
    }

    #[test]
    fn cannot_issue_fractions_of_a_cent() {
        let err = Invoice::issue(issue_cmd("100.005", InvoiceStatus::Paid)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("2 decimal places")));

        // Trailing zeros are not extra precision.
        assert!(Invoice::issue(issue_cmd("100.0500", InvoiceStatus::Paid)).is_ok());
    }

    #[test]
    fn cannot_issue_above_the_value_cap() {
        assert_eq!(MAX_INVOICE_VALUE, "1000000000000000".parse::<Decimal>().unwrap());
        assert!(Invoice::issue(issue_cmd("1000000000000000", InvoiceStatus::Overdue)).is_ok());

        for value in ["1000000000000000.01", "79228162514264337593543950335"] {
            let err = Invoice::issue(issue_cmd(value, InvoiceStatus::Overdue)).unwrap_err();
            match err {
                DomainError::Validation(msg) if msg.contains("must not exceed") => {}
                _ => panic!("Expected Validation error for value {value}"),
            }
        }
    }

    #[test]
    fn capped_value_values_without_overflow() {
        let invoice =
            Invoice::issue(issue_cmd("1000000000000000", InvoiceStatus::Overdue)).unwrap();
        // Ten thousand years late.
        let v = invoice.valuation(date(12024, 1, 10));
        assert_eq!(v.months_overdue, 120_000);
        // 10^15 * (1 + 0.02 + 0.01 * 120_000)
        assert_eq!(v.updated_value.to_string(), "1201020000000000000.00");
    }

    #[test]
    fn status_parses_english_and_portuguese_labels() {
        assert_eq!("paid".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Paid);
        assert_eq!("PAGO".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Paid);
        assert_eq!("Pendente".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Pending);
        assert_eq!(" VENCIDO ".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Overdue);
        assert_eq!(
            "cancelled".parse::<InvoiceStatus>().unwrap_err(),
            DomainError::UnknownStatus("cancelled".to_string())
        );
    }

    #[test]
    fn status_serde_uses_english_names() {
        let json = serde_json::to_string(&InvoiceStatus::Overdue).unwrap();
        assert_eq!(json, "\"OVERDUE\"");
        let parsed: InvoiceStatus = serde_json::from_str("\"vencido\"").unwrap();
        assert_eq!(parsed, InvoiceStatus::Overdue);
        assert!(serde_json::from_str::<InvoiceStatus>("\"lost\"").is_err());
    }

    #[test]
    fn pending_past_due_reads_as_overdue() {
        let invoice = Invoice::issue(issue_cmd("1000", InvoiceStatus::Pending)).unwrap();
        assert_eq!(invoice.effective_status(date(2024, 1, 10)), InvoiceStatus::Pending);
        assert_eq!(invoice.effective_status(date(2024, 1, 11)), InvoiceStatus::Overdue);
        assert!(invoice.is_overdue(date(2024, 1, 11)));
    }

    #[test]
    fn paying_freezes_the_valuation() {
        let mut invoice = Invoice::issue(issue_cmd("1000", InvoiceStatus::Overdue)).unwrap();
        let late = date(2024, 6, 1);
        assert_eq!(invoice.valuation(late).months_overdue, 4);

        invoice.mark_paid();
        invoice.mark_paid();
        assert_eq!(invoice.status(), InvoiceStatus::Paid);
        assert_eq!(invoice.effective_status(late), InvoiceStatus::Paid);
        assert!(!invoice.is_overdue(late));
        let v = invoice.valuation(late);
        assert_eq!(v.updated_value, invoice.value());
        assert!(!v.has_penalty());
    }
}
