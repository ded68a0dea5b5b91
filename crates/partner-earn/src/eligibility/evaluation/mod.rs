mod base;
mod overrides;
mod partner;
mod trace;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{OverrideEffect, OverrideRule, Partner};
use super::domain::{EvaluationContext, PartnerId, RegionCode, Tier};
use super::registry::Registry;
use base::base_eligibility;
use overrides::resolve_overrides;
use partner::partner_eligibility;
use trace::TraceBuilder;

pub use trace::format_flags;

/// Final verdict for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    Eligible,
    Conditional,
    Blocked,
}

impl EvaluationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationStatus::Eligible => "eligible",
            EvaluationStatus::Conditional => "conditional",
            EvaluationStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single gate (base or partner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StageVerdict {
    pub eligible: bool,
    pub reason: String,
}

impl StageVerdict {
    pub(crate) fn eligible(reason: String) -> Self {
        Self {
            eligible: true,
            reason,
        }
    }

    pub(crate) fn blocked(reason: String) -> Self {
        Self {
            eligible: false,
            reason,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        if self.eligible {
            "eligible"
        } else {
            "blocked"
        }
    }
}

/// Override that fired during evaluation, in firing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedOverride {
    pub id: String,
    pub effect: OverrideEffect,
    pub description: String,
}

impl From<&OverrideRule> for AppliedOverride {
    fn from(rule: &OverrideRule) -> Self {
        Self {
            id: rule.id.clone(),
            effect: rule.effect,
            description: rule.description.clone(),
        }
    }
}

/// Trimmed partner configuration echoed back for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerSummary {
    pub id: PartnerId,
    pub name: String,
    pub allowed_regions: Vec<RegionCode>,
    pub blocked_regions: Vec<RegionCode>,
    pub blocked_tiers: Vec<Tier>,
}

impl From<&Partner> for PartnerSummary {
    fn from(partner: &Partner) -> Self {
        Self {
            id: partner.id.clone(),
            name: partner.name.clone(),
            allowed_regions: partner.allowed_regions.clone(),
            blocked_regions: partner.blocked_regions.clone(),
            blocked_tiers: partner.blocked_tiers.clone(),
        }
    }
}

/// Structured snapshot of the inputs and intermediate results behind a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSnapshot {
    pub context: EvaluationContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<PartnerSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_eligible: Option<bool>,
    #[serde(default)]
    pub applied_overrides: Vec<AppliedOverride>,
}

/// Evaluation output with per-stage explanations and the ordered decision trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub status: EvaluationStatus,
    pub base_explanation: String,
    pub partner_explanation: String,
    pub exception_explanation: String,
    pub trace: Vec<String>,
    pub applied_overrides: Vec<AppliedOverride>,
    pub raw: RawSnapshot,
}

impl EvaluationResult {
    pub fn summary(&self) -> String {
        match self.status {
            EvaluationStatus::Eligible => format!(
                "This scenario is eligible. {} can earn in this configuration based on the partner rules and any applicable overrides.",
                self.raw.context.partner
            ),
            EvaluationStatus::Conditional => "This scenario is conditionally eligible: an override is granting earn where the default configuration would not.".to_string(),
            EvaluationStatus::Blocked => "This scenario is blocked. Either base program, partner configuration, or a specific override prevented earn.".to_string(),
        }
    }

    pub fn applied_override_ids(&self) -> Vec<&str> {
        self.applied_overrides
            .iter()
            .map(|applied| applied.id.as_str())
            .collect()
    }
}

/// Stateless evaluator bound to a shared registry.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    registry: Arc<Registry>,
}

impl EligibilityEngine {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn evaluate(&self, ctx: &EvaluationContext) -> EvaluationResult {
        let result = evaluate(&self.registry, ctx);
        debug!(
            partner = %ctx.partner,
            region = %ctx.region,
            status = result.status.label(),
            applied_overrides = result.applied_overrides.len(),
            "partner earn evaluated"
        );
        result
    }
}

/// Run the base, partner and override stages for one context.
pub fn evaluate(registry: &Registry, ctx: &EvaluationContext) -> EvaluationResult {
    let Some(partner) = registry.lookup_partner(ctx.partner.as_str()) else {
        return unknown_partner(ctx);
    };

    let region_label = registry.region_label(&ctx.region);
    let mut trace = TraceBuilder::default();
    trace.context(ctx, region_label);

    let base = base_eligibility(ctx, registry, region_label);
    trace.base(&base);

    if !base.eligible {
        trace.stages_skipped();
        trace.flags(&ctx.flags);
        return EvaluationResult {
            status: EvaluationStatus::Blocked,
            base_explanation: base.reason,
            partner_explanation: "Partner rules were not evaluated because the transaction failed base program eligibility.".to_string(),
            exception_explanation: "No exception could override a base program block in this model.".to_string(),
            trace: trace.finish(),
            applied_overrides: Vec::new(),
            raw: RawSnapshot {
                context: ctx.clone(),
                partner: Some(PartnerSummary::from(partner)),
                base_eligible: Some(false),
                applied_overrides: Vec::new(),
            },
        };
    }

    let partner_verdict = partner_eligibility(ctx, partner, region_label);
    trace.partner(partner, &partner_verdict);

    let resolution = resolve_overrides(ctx, partner, partner_verdict.eligible);
    trace.overrides(partner, &resolution.applied);
    trace.flags(&ctx.flags);

    let applied_overrides: Vec<AppliedOverride> = resolution
        .applied
        .iter()
        .copied()
        .map(AppliedOverride::from)
        .collect();

    EvaluationResult {
        status: resolution.status,
        base_explanation: base.reason,
        partner_explanation: partner_verdict.reason,
        exception_explanation: resolution.explanation,
        trace: trace.finish(),
        applied_overrides: applied_overrides.clone(),
        raw: RawSnapshot {
            context: ctx.clone(),
            partner: Some(PartnerSummary::from(partner)),
            base_eligible: Some(true),
            applied_overrides,
        },
    }
}

fn unknown_partner(ctx: &EvaluationContext) -> EvaluationResult {
    EvaluationResult {
        status: EvaluationStatus::Blocked,
        base_explanation: format!(
            "No partner configuration was found for '{}'. The transaction falls back to the safe default of no earn.",
            ctx.partner
        ),
        partner_explanation: "Unknown partner, treated as ineligible.".to_string(),
        exception_explanation: "No exception could be applied to an unknown partner.".to_string(),
        trace: vec![format!(
            "[ERROR] Partner configuration missing for '{}'.",
            ctx.partner
        )],
        applied_overrides: Vec::new(),
        raw: RawSnapshot {
            context: ctx.clone(),
            partner: None,
            base_eligible: None,
            applied_overrides: Vec::new(),
        },
    }
}
