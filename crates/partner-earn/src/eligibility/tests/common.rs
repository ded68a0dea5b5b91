use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::eligibility::catalog::{OverrideEffect, OverrideRule, Partner, PartnerCatalog};
use crate::eligibility::condition::RuleCondition;
use crate::eligibility::domain::{
    Channel, ContextFlags, EvaluationContext, PartnerId, RegionCode, Tier,
};
use crate::eligibility::evaluation::EligibilityEngine;
use crate::eligibility::registry::Registry;
use crate::eligibility::service::EligibilityService;

pub(super) fn registry() -> Arc<Registry> {
    Arc::new(Registry::standard())
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(registry())
}

pub(super) fn service() -> Arc<EligibilityService> {
    Arc::new(EligibilityService::new(registry()))
}

pub(super) fn context(region: &str, partner: &str, tier: Tier, channel: Channel) -> EvaluationContext {
    EvaluationContext {
        region: RegionCode::new(region),
        partner: PartnerId::new(partner),
        tier,
        channel,
        flags: ContextFlags::default(),
    }
}

pub(super) fn with_flags(
    mut ctx: EvaluationContext,
    promo: bool,
    cobranded: bool,
    corporate: bool,
) -> EvaluationContext {
    ctx.flags = ContextFlags {
        promo,
        cobranded,
        corporate,
    };
    ctx
}

/// Region EU, AERO, Member, Online with a promotion running.
pub(super) fn example_context() -> EvaluationContext {
    with_flags(
        context("EU", "AERO", Tier::Member, Channel::Online),
        true,
        false,
        false,
    )
}

pub(super) fn all_flag_combinations() -> Vec<ContextFlags> {
    let mut combos = Vec::new();
    for promo in [false, true] {
        for cobranded in [false, true] {
            for corporate in [false, true] {
                combos.push(ContextFlags {
                    promo,
                    cobranded,
                    corporate,
                });
            }
        }
    }
    combos
}

pub(super) fn rule(id: &str, condition: RuleCondition, effect: OverrideEffect) -> OverrideRule {
    OverrideRule {
        id: id.to_string(),
        description: format!("{id} description"),
        condition,
        effect,
    }
}

pub(super) fn test_partner(
    allowed: &[&str],
    blocked: &[&str],
    blocked_tiers: Vec<Tier>,
    overrides: Vec<OverrideRule>,
) -> Partner {
    Partner {
        id: PartnerId::new("TEST"),
        name: "Test Partner".to_string(),
        description: "Synthetic partner for precedence checks.".to_string(),
        allowed_regions: allowed.iter().copied().map(RegionCode::new).collect(),
        blocked_regions: blocked.iter().copied().map(RegionCode::new).collect(),
        blocked_tiers,
        notes: String::new(),
        overrides,
    }
}

/// Standard regions and base restrictions with a single custom partner.
pub(super) fn engine_with(partner: Partner) -> EligibilityEngine {
    let mut catalog = PartnerCatalog::standard();
    catalog.partners = vec![partner];
    let registry = Registry::from_catalog(catalog).expect("catalog is valid");
    EligibilityEngine::new(Arc::new(registry))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
