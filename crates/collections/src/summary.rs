//! Portfolio summary: totals owed across a set of invoices.
//!
//! Typically one guardian's invoices (for a negotiation) or a school's whole
//! portfolio (for a dashboard). Every figure comes from the same valuation the
//! per-invoice views use, so the totals always match the line items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use debtdesk_core::{Money, ValueObject};

use crate::invoice::{Invoice, InvoiceStatus};
use crate::valuation::PenaltyPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtSummary {
    pub invoice_count: usize,
    pub paid_count: usize,
    pub overdue_count: usize,
    /// Original value of unpaid invoices.
    pub original_total: Money,
    pub fine_total: Money,
    pub interest_total: Money,
    /// Sum of the (already rounded) updated values of unpaid invoices.
    pub updated_total: Money,
    pub max_months_overdue: u32,
}

impl ValueObject for DebtSummary {}

impl DebtSummary {
    /// Paid invoices are counted but add nothing to the outstanding totals.
    pub fn from_invoices<'a, I>(invoices: I, policy: &PenaltyPolicy, now: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Invoice>,
    {
        let mut summary = DebtSummary::default();

        for invoice in invoices {
            summary.invoice_count += 1;

            if invoice.status() == InvoiceStatus::Paid {
                summary.paid_count += 1;
                continue;
            }
            if invoice.is_overdue(now) {
                summary.overdue_count += 1;
            }

            let valuation = invoice.valuation_with(policy, now);
            summary.original_total = summary.original_total + invoice.value();
            summary.fine_total = summary.fine_total + valuation.fine;
            summary.interest_total = summary.interest_total + valuation.interest;
            summary.updated_total = summary.updated_total + valuation.updated_value;
            summary.max_months_overdue = summary.max_months_overdue.max(valuation.months_overdue);
        }

        tracing::debug!(
            invoice_count = summary.invoice_count,
            overdue_count = summary.overdue_count,
            updated_total = %summary.updated_total,
            "summarized debt portfolio"
        );

        summary
    }

    /// Outstanding penalties (fine plus interest) across the portfolio.
    pub fn penalty_total(&self) -> Money {
        self.fine_total + self.interest_total
    }
}
