use super::super::catalog::Partner;
use super::super::domain::EvaluationContext;
use super::StageVerdict;

/// Region and tier gate for a single partner.
///
/// Checks run in a fixed order and each failure overwrites the reason, so the reported reason
/// belongs to the last failing check while `eligible` reflects whether any check failed.
pub(crate) fn partner_eligibility(
    ctx: &EvaluationContext,
    partner: &Partner,
    region_label: &str,
) -> StageVerdict {
    let mut verdict = StageVerdict::eligible(format!(
        "{} is active in {} for this tier.",
        partner.name, region_label
    ));

    if !partner.allowed_regions.contains(&ctx.region) {
        verdict = StageVerdict::blocked(format!(
            "{} is not configured as an earning partner in {}.",
            partner.name, region_label
        ));
    }

    if partner.blocked_regions.contains(&ctx.region) {
        verdict = StageVerdict::blocked(format!(
            "{} is explicitly blocked in {} by partner contract.",
            partner.name, region_label
        ));
    }

    if partner.blocked_tiers.contains(&ctx.tier) {
        verdict = StageVerdict::blocked(format!(
            "{} does not fund earn for {} members in this configuration.",
            partner.name, ctx.tier
        ));
    }

    verdict
}
