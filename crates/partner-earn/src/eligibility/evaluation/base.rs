use super::super::domain::EvaluationContext;
use super::super::registry::Registry;
use super::StageVerdict;

/// Program-wide gate. Partner identity never influences this verdict.
pub(crate) fn base_eligibility(
    ctx: &EvaluationContext,
    registry: &Registry,
    region_label: &str,
) -> StageVerdict {
    match registry
        .base_restrictions()
        .iter()
        .find(|restriction| restriction.condition.matches(ctx))
    {
        Some(restriction) => StageVerdict::blocked(restriction.reason.clone()),
        None => StageVerdict::eligible(format!(
            "Program is open for {region_label} for all standard tiers."
        )),
    }
}
