use std::sync::Arc;

use axum::{
    Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};

use debtdesk_collections::{DebtSummary, Invoice, IssueInvoice};
use debtdesk_core::InvoiceId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(value_debt))
        .route("/summary", post(summarize_debts))
}

pub async fn value_debt(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ValuationRequest>,
) -> axum::response::Response {
    let offset = services.utc_offset();

    let value = match dto::parse_value(body.value) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let due_date = match dto::parse_date("dueDate", &body.due_date, offset) {
        Ok(d) => d,
        Err(resp) => return resp,
    };
    let status = match dto::parse_status(&body.status) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let as_of = match body.as_of.as_deref() {
        Some(raw) => match dto::parse_date("asOf", raw, offset) {
            Ok(d) => d,
            Err(resp) => return resp,
        },
        None => services.today(),
    };

    let invoice = match Invoice::issue(IssueInvoice {
        invoice_id: InvoiceId::new(),
        guardian: None,
        student: None,
        description: None,
        value,
        due_date,
        status,
    }) {
        Ok(i) => i,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let valuation = invoice.valuation_with(services.policy(), as_of);
    let effective_status = invoice.effective_status(as_of);

    tracing::info!(
        %value,
        %due_date,
        %status,
        %as_of,
        updated_value = %valuation.updated_value,
        "valuation served"
    );

    (
        StatusCode::OK,
        Json(dto::ValuationResponse {
            as_of,
            effective_status,
            valuation,
        }),
    )
        .into_response()
}

pub async fn summarize_debts(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SummaryRequest>,
) -> axum::response::Response {
    let offset = services.utc_offset();

    let as_of = match body.as_of.as_deref() {
        Some(raw) => match dto::parse_date("asOf", raw, offset) {
            Ok(d) => d,
            Err(resp) => return resp,
        },
        None => services.today(),
    };

    let mut invoices = Vec::with_capacity(body.invoices.len());
    for line in body.invoices {
        match dto::summary_invoice_to_domain(line, offset) {
            Ok(invoice) => invoices.push(invoice),
            Err(resp) => return resp,
        }
    }

    let policy = services.policy();
    let summary = DebtSummary::from_invoices(&invoices, policy, as_of);
    let items = invoices
        .iter()
        .map(|invoice| {
            dto::SummaryItem::new(invoice, invoice.valuation_with(policy, as_of), as_of)
        })
        .collect::<Vec<_>>();

    tracing::info!(
        invoice_count = summary.invoice_count,
        overdue_count = summary.overdue_count,
        updated_total = %summary.updated_total,
        %as_of,
        "debt summary served"
    );

    (
        StatusCode::OK,
        Json(dto::SummaryResponse {
            as_of,
            summary,
            items,
        }),
    )
        .into_response()
}
