use serde::{Deserialize, Serialize};

use super::domain::{Channel, EvaluationContext, RegionCode, Tier};

/// Declarative predicate over an [`EvaluationContext`].
///
/// Override rules and base restrictions carry one of these instead of code, so a catalog can be
/// authored as plain JSON and every rule is evaluated by the same interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum RuleCondition {
    Always,
    Region(RegionCode),
    TierIn(Vec<Tier>),
    Channel(Channel),
    Promo(bool),
    Cobranded(bool),
    Corporate(bool),
    All(Vec<RuleCondition>),
    Any(Vec<RuleCondition>),
    Not(Box<RuleCondition>),
}

impl RuleCondition {
    pub fn region(code: &str) -> Self {
        Self::Region(RegionCode::new(code))
    }

    pub fn all(conditions: impl IntoIterator<Item = RuleCondition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    pub fn any(conditions: impl IntoIterator<Item = RuleCondition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    pub fn negate(condition: RuleCondition) -> Self {
        Self::Not(Box::new(condition))
    }

    pub fn matches(&self, ctx: &EvaluationContext) -> bool {
        match self {
            RuleCondition::Always => true,
            RuleCondition::Region(code) => ctx.region == *code,
            RuleCondition::TierIn(tiers) => tiers.contains(&ctx.tier),
            RuleCondition::Channel(channel) => ctx.channel == *channel,
            RuleCondition::Promo(expected) => ctx.flags.promo == *expected,
            RuleCondition::Cobranded(expected) => ctx.flags.cobranded == *expected,
            RuleCondition::Corporate(expected) => ctx.flags.corporate == *expected,
            RuleCondition::All(conditions) => conditions.iter().all(|inner| inner.matches(ctx)),
            RuleCondition::Any(conditions) => conditions.iter().any(|inner| inner.matches(ctx)),
            RuleCondition::Not(inner) => !inner.matches(ctx),
        }
    }
}
