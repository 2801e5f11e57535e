//! Debt valuation: what an invoice is worth today.
//!
//! Rule:
//! - paid, or not yet past the due date: the original value, nothing else;
//! - otherwise a flat fine (2% of the value) is charged immediately, plus
//!   simple interest of 1% of the value per *completed* calendar month past
//!   the due date.
//!
//! The payable total is rounded to cents (half away from zero) and always
//! carries exactly two decimal places, on both branches. Fine and interest are
//! kept exact so they can be displayed as a breakdown.
//!
//! The evaluation date is always passed in. Use [`evaluation_date`] to turn a
//! clock instant into a calendar date before valuing.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use debtdesk_core::{DomainError, DomainResult, Money, ValueObject};

use crate::invoice::InvoiceStatus;

/// Penalty rates applied to overdue invoices.
///
/// Only built through [`PenaltyPolicy::new`] or `Default`, so rates are always
/// within `0..=1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyPolicy {
    /// Flat fine, as a fraction of the original value (0.02 = 2%).
    fine_rate: Decimal,
    /// Simple interest per completed overdue month, as a fraction of the
    /// original value (0.01 = 1%).
    monthly_interest_rate: Decimal,
}

impl ValueObject for PenaltyPolicy {}

impl Default for PenaltyPolicy {
    fn default() -> Self {
        Self {
            fine_rate: Decimal::new(2, 2),
            monthly_interest_rate: Decimal::new(1, 2),
        }
    }
}

impl PenaltyPolicy {
    pub fn new(fine_rate: Decimal, monthly_interest_rate: Decimal) -> DomainResult<Self> {
        check_rate("fine rate", fine_rate)?;
        check_rate("monthly interest rate", monthly_interest_rate)?;
        Ok(Self {
            fine_rate,
            monthly_interest_rate,
        })
    }

    pub fn fine_rate(&self) -> Decimal {
        self.fine_rate
    }

    pub fn monthly_interest_rate(&self) -> Decimal {
        self.monthly_interest_rate
    }

    /// Value a debt under this policy.
    ///
    /// Total over well-typed input: no validation happens here. Callers are
    /// expected to have checked the value at data-entry time
    /// ([`crate::invoice::validate_value`]); within those bounds no
    /// arithmetic here can overflow.
    pub fn value(
        &self,
        value: Money,
        due_date: NaiveDate,
        status: InvoiceStatus,
        now: NaiveDate,
    ) -> DebtValuation {
        if status == InvoiceStatus::Paid || now <= due_date {
            return DebtValuation::unchanged(value);
        }

        let months = months_overdue(due_date, now);

        // Charged as soon as the invoice is late, even before a full month.
        let fine = value * self.fine_rate;
        let interest = if months > 0 {
            value * (self.monthly_interest_rate * Decimal::from(months))
        } else {
            Money::ZERO_CENTS
        };
        let updated_value = (value + fine + interest).round_to_cents();

        tracing::debug!(
            %value,
            %due_date,
            %now,
            months_overdue = months,
            %fine,
            %interest,
            %updated_value,
            "valued overdue debt"
        );

        DebtValuation {
            updated_value,
            fine,
            interest,
            months_overdue: months,
        }
    }
}

/// Payable amount of an invoice at an evaluation date, with its breakdown.
///
/// Derived, never persisted: recompute it whenever it is displayed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtValuation {
    /// `value + fine + interest`, rounded to cents.
    pub updated_value: Money,
    pub fine: Money,
    pub interest: Money,
    /// Completed calendar months past the due date.
    pub months_overdue: u32,
}

impl ValueObject for DebtValuation {}

impl DebtValuation {
    fn unchanged(value: Money) -> Self {
        Self {
            updated_value: value.round_to_cents(),
            fine: Money::ZERO_CENTS,
            interest: Money::ZERO_CENTS,
            months_overdue: 0,
        }
    }

    /// Fine plus interest.
    pub fn penalty(&self) -> Money {
        self.fine + self.interest
    }

    pub fn has_penalty(&self) -> bool {
        !self.penalty().is_zero()
    }
}

fn check_rate(name: &str, rate: Decimal) -> DomainResult<()> {
    if rate.is_sign_negative() {
        return Err(DomainError::validation(format!("{name} must not be negative")));
    }
    if rate > Decimal::ONE {
        return Err(DomainError::validation(format!("{name} must not exceed 1")));
    }
    Ok(())
}

/// Value a debt with the standard 2% fine and 1% monthly interest.
pub fn value_debt(
    value: Money,
    due_date: NaiveDate,
    status: InvoiceStatus,
    now: NaiveDate,
) -> DebtValuation {
    PenaltyPolicy::default().value(value, due_date, status, now)
}

/// Number of fully completed calendar months between `due_date` and `now`.
///
/// A month counts once the day of month of `due_date` has been reached again.
/// Never negative.
pub fn months_overdue(due_date: NaiveDate, now: NaiveDate) -> u32 {
    let mut months = (now.year() - due_date.year()) * 12
        + (now.month() as i32 - due_date.month() as i32);
    if now.day() < due_date.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Calendar date of `instant` as seen at `offset`, time of day dropped.
///
/// Comparing instants instead of dates shifts results by a day around
/// midnight, so valuations only ever see the date.
pub fn evaluation_date<Tz: TimeZone>(instant: &DateTime<Tz>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}
