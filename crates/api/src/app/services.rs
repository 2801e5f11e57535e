use chrono::{FixedOffset, NaiveDate, Utc};

use debtdesk_collections::{PenaltyPolicy, evaluation_date};

/// Settings every handler needs to value a debt.
#[derive(Debug, Clone)]
pub struct AppServices {
    policy: PenaltyPolicy,
    utc_offset: FixedOffset,
}

impl AppServices {
    pub fn new(policy: PenaltyPolicy, utc_offset: FixedOffset) -> Self {
        Self { policy, utc_offset }
    }

    pub fn policy(&self) -> &PenaltyPolicy {
        &self.policy
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Today's date in the configured offset.
    pub fn today(&self) -> NaiveDate {
        evaluation_date(&Utc::now(), self.utc_offset)
    }
}
