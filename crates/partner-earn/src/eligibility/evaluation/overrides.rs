use super::super::catalog::{OverrideEffect, OverrideRule, Partner};
use super::super::domain::EvaluationContext;
use super::EvaluationStatus;

const NO_OVERRIDES_NEEDED: &str =
    "No exceptions or overrides were needed. Eligibility follows the base partner configuration.";
const PARTNER_BLOCK_SUFFICIENT: &str =
    "The partner-level configuration alone is sufficient to block this transaction.";
const NOTES_ONLY: &str = "Informational overrides fired but none changed the outcome.";

pub(crate) struct OverrideResolution<'a> {
    pub status: EvaluationStatus,
    pub explanation: String,
    pub applied: Vec<&'a OverrideRule>,
}

/// Walk the partner's overrides in declaration order; the last status-changing match wins.
pub(crate) fn resolve_overrides<'a>(
    ctx: &EvaluationContext,
    partner: &'a Partner,
    partner_eligible: bool,
) -> OverrideResolution<'a> {
    let mut status = if partner_eligible {
        EvaluationStatus::Eligible
    } else {
        EvaluationStatus::Blocked
    };
    let mut explanation: Option<String> = None;
    let mut applied = Vec::new();

    for rule in partner
        .overrides
        .iter()
        .filter(|rule| rule.condition.matches(ctx))
    {
        applied.push(rule);

        match rule.effect {
            OverrideEffect::Block => status = EvaluationStatus::Blocked,
            OverrideEffect::Allow => status = EvaluationStatus::Eligible,
            OverrideEffect::AllowConditional => status = EvaluationStatus::Conditional,
            OverrideEffect::Note => {
                // notes only annotate a passing outcome
                if status == EvaluationStatus::Eligible {
                    explanation = Some(rule.description.clone());
                }
                continue;
            }
        }
        explanation = Some(rule.description.clone());
    }

    let explanation = match explanation {
        Some(text) => text,
        None if applied.is_empty() && partner_eligible => NO_OVERRIDES_NEEDED.to_string(),
        None if applied.is_empty() => PARTNER_BLOCK_SUFFICIENT.to_string(),
        None => NOTES_ONLY.to_string(),
    };

    OverrideResolution {
        status,
        explanation,
        applied,
    }
}
