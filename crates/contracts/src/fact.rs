//! Fact - the record submitted to the reporting API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Multipart field names, in the order they are written
pub const FORM_FIELD_NAMES: [&str; 10] = [
    "period_start",
    "period_end",
    "period_key",
    "indicator_to_mo_id",
    "indicator_to_mo_fact_id",
    "value",
    "fact_time",
    "is_plan",
    "auth_user_id",
    "comment",
];

/// One measurement for an indicator/org-unit pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Reporting period start (`YYYY-MM-DD`)
    pub period_start: String,

    /// Reporting period end (`YYYY-MM-DD`)
    pub period_end: String,

    /// Period granularity (e.g. "month")
    pub period_key: String,

    /// Indicator-to-MO pairing id
    pub indicator_to_mo_id: u64,

    /// Existing fact to update; `None` creates a new fact (sent as `0`)
    #[serde(default)]
    pub indicator_to_mo_fact_id: Option<u64>,

    /// Measurement value
    pub value: i64,

    /// When the fact occurred (`YYYY-MM-DD`)
    pub fact_time: String,

    /// Plan (true) or actual (false)
    #[serde(default)]
    pub is_plan: bool,

    /// Acting user id
    pub auth_user_id: u64,

    /// Free-text annotation
    #[serde(default)]
    pub comment: String,
}

impl Fact {
    /// Text form fields as sent on the wire
    ///
    /// Integers are rendered as decimal text, `is_plan` as `0`/`1`.
    pub fn form_fields(&self) -> [(&'static str, String); 10] {
        [
            ("period_start", self.period_start.clone()),
            ("period_end", self.period_end.clone()),
            ("period_key", self.period_key.clone()),
            ("indicator_to_mo_id", self.indicator_to_mo_id.to_string()),
            (
                "indicator_to_mo_fact_id",
                self.indicator_to_mo_fact_id.unwrap_or(0).to_string(),
            ),
            ("value", self.value.to_string()),
            ("fact_time", self.fact_time.clone()),
            ("is_plan", u8::from(self.is_plan).to_string()),
            ("auth_user_id", self.auth_user_id.to_string()),
            ("comment", self.comment.clone()),
        ]
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}..{} {} mo={} fact={} value={} at={} plan={} user={} comment={:?}}}",
            self.period_start,
            self.period_end,
            self.period_key,
            self.indicator_to_mo_id,
            self.indicator_to_mo_fact_id.unwrap_or(0),
            self.value,
            self.fact_time,
            u8::from(self.is_plan),
            self.auth_user_id,
            self.comment,
        )
    }
}
