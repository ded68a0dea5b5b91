use super::super::catalog::{OverrideRule, Partner};
use super::super::domain::{ContextFlags, EvaluationContext, RegionCode};
use super::StageVerdict;

/// Comma separated list of active flags, or `None`.
pub fn format_flags(flags: &ContextFlags) -> String {
    let active = flags.active_labels();
    if active.is_empty() {
        "None".to_string()
    } else {
        active.join(", ")
    }
}

fn join_regions(codes: &[RegionCode]) -> String {
    if codes.is_empty() {
        return "none".to_string();
    }
    codes
        .iter()
        .map(RegionCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accumulates the ordered, human-readable rule path.
#[derive(Debug, Default)]
pub(crate) struct TraceBuilder {
    lines: Vec<String>,
}

impl TraceBuilder {
    pub(crate) fn context(&mut self, ctx: &EvaluationContext, region_label: &str) {
        self.lines.push(format!(
            "[BASE] Region: {} ({}), Tier: {}, Channel: {}",
            ctx.region, region_label, ctx.tier, ctx.channel
        ));
    }

    pub(crate) fn base(&mut self, verdict: &StageVerdict) {
        self.lines.push(format!(
            "[BASE] Result: {} - {}",
            verdict.label(),
            verdict.reason
        ));
    }

    pub(crate) fn stages_skipped(&mut self) {
        self.lines
            .push("[PARTNER] Skipped: base program eligibility failed.".to_string());
        self.lines
            .push("[OVERRIDE] Skipped: base program eligibility failed.".to_string());
    }

    pub(crate) fn partner(&mut self, partner: &Partner, verdict: &StageVerdict) {
        self.lines.push(format!(
            "[PARTNER] Allowed regions: {}",
            join_regions(&partner.allowed_regions)
        ));
        self.lines.push(format!(
            "[PARTNER] Blocked regions: {}",
            join_regions(&partner.blocked_regions)
        ));
        let blocked_tiers = if partner.blocked_tiers.is_empty() {
            "none".to_string()
        } else {
            partner
                .blocked_tiers
                .iter()
                .map(|tier| tier.label())
                .collect::<Vec<_>>()
                .join(", ")
        };
        self.lines
            .push(format!("[PARTNER] Blocked tiers: {blocked_tiers}"));
        self.lines.push(format!(
            "[PARTNER] Result: {} - {}",
            verdict.label(),
            verdict.reason
        ));
    }

    pub(crate) fn overrides(&mut self, partner: &Partner, applied: &[&OverrideRule]) {
        if partner.overrides.is_empty() {
            self.lines
                .push("[OVERRIDE] No partner overrides configured.".to_string());
        }
        for rule in applied {
            self.lines.push(format!(
                "[OVERRIDE] Applied: {} - {}",
                rule.id, rule.description
            ));
        }
        if applied.is_empty() {
            self.lines
                .push("[OVERRIDE] No overrides fired for this scenario.".to_string());
        }
    }

    pub(crate) fn flags(&mut self, flags: &ContextFlags) {
        self.lines
            .push(format!("[CONTEXT] Flags: {}", format_flags(flags)));
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.lines
    }
}
