use super::common::*;
use crate::eligibility::domain::{Channel, Tier};
use crate::eligibility::evaluation::EvaluationStatus;

#[test]
fn tier_block_reason_wins_over_region_block() {
    let engine = engine_with(test_partner(&["US"], &["US"], vec![Tier::Silver], Vec::new()));
    let ctx = context("US", "TEST", Tier::Silver, Channel::Online);

    let result = engine.evaluate(&ctx);

    assert_eq!(result.status, EvaluationStatus::Blocked);
    assert_eq!(
        result.partner_explanation,
        "Test Partner does not fund earn for Silver members in this configuration."
    );
}

#[test]
fn blocked_region_wins_when_region_is_also_allowed() {
    let engine = engine_with(test_partner(&["EU"], &["EU"], Vec::new(), Vec::new()));
    let ctx = context("EU", "TEST", Tier::Gold, Channel::Online);

    let result = engine.evaluate(&ctx);

    assert_eq!(result.status, EvaluationStatus::Blocked);
    assert_eq!(
        result.partner_explanation,
        "Test Partner is explicitly blocked in Europe by partner contract."
    );
}

#[test]
fn blocked_region_reason_overwrites_not_configured_reason() {
    let engine = engine_with(test_partner(&["US"], &["UK"], Vec::new(), Vec::new()));
    let ctx = context("UK", "TEST", Tier::Gold, Channel::Online);

    let result = engine.evaluate(&ctx);

    assert_eq!(
        result.partner_explanation,
        "Test Partner is explicitly blocked in United Kingdom by partner contract."
    );
}

#[test]
fn missing_allowed_region_reports_not_configured() {
    let engine = engine_with(test_partner(&["US"], &[], Vec::new(), Vec::new()));
    let ctx = context("EU", "TEST", Tier::Gold, Channel::Online);

    let result = engine.evaluate(&ctx);

    assert_eq!(result.status, EvaluationStatus::Blocked);
    assert_eq!(
        result.partner_explanation,
        "Test Partner is not configured as an earning partner in Europe."
    );
}

#[test]
fn empty_lists_are_rendered_as_none_in_trace() {
    let engine = engine_with(test_partner(&[], &[], Vec::new(), Vec::new()));
    let ctx = context("US", "TEST", Tier::Gold, Channel::Online);

    let result = engine.evaluate(&ctx);

    assert!(result.trace.contains(&"[PARTNER] Allowed regions: none".to_string()));
    assert!(result.trace.contains(&"[PARTNER] Blocked regions: none".to_string()));
    assert!(result.trace.contains(&"[PARTNER] Blocked tiers: none".to_string()));
    assert!(result
        .trace
        .contains(&"[OVERRIDE] No partner overrides configured.".to_string()));
}
