//! Config validation
//!
//! Rules:
//! - api.endpoint is an absolute http(s) URL with a host
//! - api.token, when present, is not blank
//! - period dates parse as `YYYY-MM-DD` and period_start <= period_end
//! - dispatch.passes > 0, dispatch.queue_capacity > 0 when set

use chrono::NaiveDate;
use contracts::{ContractError, LoadPlan};
use url::Url;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a LoadPlan
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(plan: &LoadPlan) -> Result<(), ContractError> {
    validate_api(plan)?;
    validate_fact_template(plan)?;
    validate_dispatch(plan)?;
    Ok(())
}

fn validate_api(plan: &LoadPlan) -> Result<(), ContractError> {
    let url = Url::parse(&plan.api.endpoint).map_err(|e| {
        ContractError::config_validation(
            "api.endpoint",
            format!("invalid URL '{}': {e}", plan.api.endpoint),
        )
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ContractError::config_validation(
            "api.endpoint",
            format!("unsupported scheme '{}', expected http or https", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(ContractError::config_validation(
            "api.endpoint",
            "endpoint has no host",
        ));
    }

    if plan.api.token.as_ref().is_some_and(|t| t.is_empty()) {
        return Err(ContractError::config_validation(
            "api.token",
            "token cannot be blank",
        ));
    }
    Ok(())
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ContractError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        ContractError::config_validation(
            field,
            format!("'{value}' is not a YYYY-MM-DD date: {e}"),
        )
    })
}

fn validate_fact_template(plan: &LoadPlan) -> Result<(), ContractError> {
    let template = &plan.facts.template;

    let start = parse_date("facts.period_start", &template.period_start)?;
    let end = parse_date("facts.period_end", &template.period_end)?;
    parse_date("facts.fact_time", &template.fact_time)?;

    if start > end {
        return Err(ContractError::config_validation(
            "facts.period_start / facts.period_end",
            format!("period_start ({start}) must be <= period_end ({end})"),
        ));
    }

    if template.period_key.trim().is_empty() {
        return Err(ContractError::config_validation(
            "facts.period_key",
            "period_key cannot be empty",
        ));
    }
    Ok(())
}

fn validate_dispatch(plan: &LoadPlan) -> Result<(), ContractError> {
    if plan.dispatch.passes == 0 {
        return Err(ContractError::config_validation(
            "dispatch.passes",
            "passes must be > 0",
        ));
    }
    if plan.dispatch.queue_capacity == Some(0) {
        return Err(ContractError::config_validation(
            "dispatch.queue_capacity",
            "queue_capacity must be > 0",
        ));
    }
    Ok(())
}
