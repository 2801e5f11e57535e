//! Tuition collections domain module.
//!
//! Business rules for overdue tuition invoices: the debt valuation rule
//! (flat fine plus simple monthly interest) and portfolio summaries built on
//! top of it. Pure, deterministic domain logic (no IO, no HTTP, no clock).
//!
//! Every screen, document or negotiation calculator that shows what a
//! guardian owes today must go through [`value_debt`] (or
//! [`PenaltyPolicy::value`]) so all totals agree.

pub mod invoice;
pub mod summary;
pub mod valuation;

pub use invoice::{Invoice, InvoiceStatus, IssueInvoice, MAX_INVOICE_VALUE, validate_value};
pub use summary::DebtSummary;
pub use valuation::{DebtValuation, PenaltyPolicy, evaluation_date, months_overdue, value_debt};
