//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;

use contracts::{Fact, LoadPlan};
use generator::FactGenerator;

use crate::cli::InfoArgs;
use crate::plan::resolve_plan;

/// Plan summary for JSON output; never carries the token itself
#[derive(Serialize)]
struct PlanInfo {
    endpoint: String,
    token_configured: bool,
    fact_count: usize,
    passes: usize,
    queue_capacity: usize,
    total_submissions: usize,
    template: contracts::FactTemplate,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sample: Vec<Fact>,
}

impl PlanInfo {
    fn new(plan: &LoadPlan, sample: usize) -> Self {
        let generator = FactGenerator::new(plan.facts.template.clone());
        Self {
            endpoint: plan.api.endpoint.clone(),
            token_configured: plan.api.token.is_some(),
            fact_count: plan.facts.count,
            passes: plan.dispatch.passes,
            queue_capacity: plan.queue_capacity(),
            total_submissions: plan.total_submissions(),
            template: plan.facts.template.clone(),
            sample: generator.iter(sample.min(plan.facts.count)).collect(),
        }
    }
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    let plan = resolve_plan(&args.plan)?;
    let info = PlanInfo::new(&plan, args.sample);

    if args.json {
        let json = serde_json::to_string_pretty(&info).context("Failed to serialize plan")?;
        println!("{}", json);
    } else {
        print_info(&info);
    }

    Ok(())
}

fn print_info(info: &PlanInfo) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                      LOAD PLAN");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("  Endpoint:          {}", info.endpoint);
    println!(
        "  Token:             {}",
        if info.token_configured {
            "configured"
        } else {
            "missing"
        }
    );
    println!("  Facts per pass:    {}", info.fact_count);
    println!("  Passes:            {}", info.passes);
    println!("  Queue capacity:    {}", info.queue_capacity);
    println!("  Total submissions: {}", info.total_submissions);
    println!();
    println!("  Template:");
    println!(
        "    period:             {} .. {} ({})",
        info.template.period_start, info.template.period_end, info.template.period_key
    );
    println!("    indicator_to_mo_id: {}", info.template.indicator_to_mo_id);
    println!("    fact_time:          {}", info.template.fact_time);
    println!("    auth_user_id:       {}", info.template.auth_user_id);
    println!("    comment_prefix:     {}", info.template.comment_prefix);

    if !info.sample.is_empty() {
        println!();
        println!("  Sample facts:");
        for fact in &info.sample {
            println!("    {}", fact);
        }
    }
    println!();
    println!("═══════════════════════════════════════════════════════════");
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::Credential;

    #[test]
    fn test_sample_is_capped_by_count() {
        let mut plan = LoadPlan::with_endpoint("https://api.test/save");
        plan.facts.count = 2;
        let info = PlanInfo::new(&plan, 5);
        assert_eq!(info.sample.len(), 2);
        assert_eq!(info.sample[1].comment, "Buffer: 2");
    }

    #[test]
    fn test_json_hides_token() {
        let mut plan = LoadPlan::with_endpoint("https://api.test/save");
        plan.api.token = Some(Credential::bearer("super-secret"));
        let json = serde_json::to_string(&PlanInfo::new(&plan, 0)).unwrap();
        assert!(json.contains("\"token_configured\":true"));
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("sample"));
    }
}
