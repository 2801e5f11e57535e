use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use debtdesk_collections::{
    DebtSummary, DebtValuation, Invoice, InvoiceStatus, IssueInvoice, evaluation_date,
    validate_value,
};
use debtdesk_core::{Entity, InvoiceId, Money};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    /// Decimal string (`"750.50"`) or JSON number.
    pub value: Decimal,
    pub due_date: String,
    pub status: String,
    /// Evaluation date; today (in the configured offset) when absent.
    pub as_of: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryInvoiceRequest {
    pub id: Option<String>,
    pub guardian: Option<String>,
    pub student: Option<String>,
    pub description: Option<String>,
    pub value: Decimal,
    pub due_date: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub invoices: Vec<SummaryInvoiceRequest>,
    pub as_of: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResponse {
    pub as_of: NaiveDate,
    pub effective_status: InvoiceStatus,
    #[serde(flatten)]
    pub valuation: DebtValuation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryItem {
    pub id: InvoiceId,
    pub guardian: Option<String>,
    pub student: Option<String>,
    pub value: Money,
    pub due_date: NaiveDate,
    pub effective_status: InvoiceStatus,
    #[serde(flatten)]
    pub valuation: DebtValuation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub as_of: NaiveDate,
    pub summary: DebtSummary,
    pub items: Vec<SummaryItem>,
}

impl SummaryItem {
    pub fn new(invoice: &Invoice, valuation: DebtValuation, as_of: NaiveDate) -> Self {
        Self {
            id: *invoice.id(),
            guardian: invoice.guardian().map(str::to_string),
            student: invoice.student().map(str::to_string),
            value: invoice.value(),
            due_date: invoice.due_date(),
            effective_status: invoice.effective_status(as_of),
            valuation,
        }
    }
}

// -------------------------
// Parsing helpers
// -------------------------

/// Accepts `YYYY-MM-DD`, or an RFC3339 instant reduced to its calendar date
/// at `offset`.
pub fn parse_date(
    field: &str,
    raw: &str,
    offset: FixedOffset,
) -> Result<NaiveDate, axum::response::Response> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => Ok(evaluation_date(&instant, offset)),
        Err(_) => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_date",
            format!("{field} must be YYYY-MM-DD or RFC3339"),
        )),
    }
}

pub fn parse_status(raw: &str) -> Result<InvoiceStatus, axum::response::Response> {
    raw.parse().map_err(errors::domain_error_to_response)
}

/// Values are checked here, at the boundary; the valuation itself trusts them.
pub fn parse_value(value: Decimal) -> Result<Money, axum::response::Response> {
    validate_value(Money::new(value)).map_err(|e| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_value", e.to_string())
    })
}

pub fn summary_invoice_to_domain(
    body: SummaryInvoiceRequest,
    offset: FixedOffset,
) -> Result<Invoice, axum::response::Response> {
    let invoice_id = match body.id {
        Some(raw) => raw.parse().map_err(errors::domain_error_to_response)?,
        None => InvoiceId::new(),
    };

    Invoice::issue(IssueInvoice {
        invoice_id,
        guardian: body.guardian,
        student: body.student,
        description: body.description,
        value: parse_value(body.value)?,
        due_date: parse_date("dueDate", &body.due_date, offset)?,
        status: parse_status(&body.status)?,
    })
    .map_err(errors::domain_error_to_response)
}
