//! # Fact Generator
//!
//! Deterministic synthetic facts for load runs.
//!
//! Fact `i` (1-based) carries `value = i` and the comment `"<prefix>: i"`;
//! every other field comes from the [`FactTemplate`]. There is no randomness
//! and no clock access, so the same inputs always give the same facts.
//!
//! ```
//! let facts = generator::generate(3);
//! assert_eq!(facts.iter().map(|f| f.value).collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

pub use contracts::{Fact, FactTemplate};
use tracing::{debug, instrument};

/// Generate `count` facts from the default template
pub fn generate(count: usize) -> Vec<Fact> {
    FactGenerator::default().generate(count)
}

/// Builds facts from a template
#[derive(Debug, Clone, Default)]
pub struct FactGenerator {
    template: FactTemplate,
}

impl FactGenerator {
    pub fn new(template: FactTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &FactTemplate {
        &self.template
    }

    /// Fact at 1-based position `index`
    pub fn fact(&self, index: usize) -> Fact {
        let t = &self.template;
        Fact {
            period_start: t.period_start.clone(),
            period_end: t.period_end.clone(),
            period_key: t.period_key.clone(),
            indicator_to_mo_id: t.indicator_to_mo_id,
            indicator_to_mo_fact_id: None,
            value: index as i64,
            fact_time: t.fact_time.clone(),
            is_plan: false,
            auth_user_id: t.auth_user_id,
            comment: format!("{}: {}", t.comment_prefix, index),
        }
    }

    /// Lazily yield facts `1..=count`
    pub fn iter(&self, count: usize) -> impl Iterator<Item = Fact> + '_ {
        (1..=count).map(move |i| self.fact(i))
    }

    /// Generate exactly `count` facts, in order
    #[instrument(name = "fact_generator_generate", skip(self))]
    pub fn generate(&self, count: usize) -> Vec<Fact> {
        let facts: Vec<Fact> = self.iter(count).collect();
        debug!(
            count = facts.len(),
            indicator_to_mo_id = self.template.indicator_to_mo_id,
            "Facts generated"
        );
        facts
    }
}
