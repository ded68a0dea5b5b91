use super::common::*;
use crate::eligibility::catalog::OverrideEffect;
use crate::eligibility::condition::RuleCondition;
use crate::eligibility::domain::{Channel, Tier};
use crate::eligibility::evaluation::EvaluationStatus;

#[test]
fn later_allow_overrides_earlier_block() {
    let engine = engine_with(test_partner(
        &["US"],
        &[],
        Vec::new(),
        vec![
            rule("FIRST_BLOCK", RuleCondition::Always, OverrideEffect::Block),
            rule("THEN_ALLOW", RuleCondition::Always, OverrideEffect::Allow),
        ],
    ));
    let ctx = context("US", "TEST", Tier::Gold, Channel::Online);

    let result = engine.evaluate(&ctx);

    assert_eq!(result.status, EvaluationStatus::Eligible);
    assert_eq!(result.applied_override_ids(), vec!["FIRST_BLOCK", "THEN_ALLOW"]);
    assert_eq!(result.exception_explanation, "THEN_ALLOW description");
}

#[test]
fn later_block_overrides_earlier_allow() {
    let engine = engine_with(test_partner(
        &["US"],
        &[],
        vec![Tier::Member],
        vec![
            rule("ALLOW_MEMBERS", RuleCondition::Always, OverrideEffect::Allow),
            rule("BLOCK_PROMO", RuleCondition::Promo(true), OverrideEffect::Block),
        ],
    ));
    let ctx = with_flags(
        context("US", "TEST", Tier::Member, Channel::Online),
        true,
        false,
        false,
    );

    let result = engine.evaluate(&ctx);

    assert_eq!(result.status, EvaluationStatus::Blocked);
    assert_eq!(result.exception_explanation, "BLOCK_PROMO description");
}

#[test]
fn non_matching_rules_are_not_recorded() {
    let engine = engine_with(test_partner(
        &["US"],
        &[],
        Vec::new(),
        vec![
            rule("ONLY_EU", RuleCondition::region("EU"), OverrideEffect::Block),
            rule("ONLY_GOLD", RuleCondition::TierIn(vec![Tier::Gold]), OverrideEffect::AllowConditional),
        ],
    ));
    let ctx = context("US", "TEST", Tier::Gold, Channel::Online);

    let result = engine.evaluate(&ctx);

    assert_eq!(result.status, EvaluationStatus::Conditional);
    assert_eq!(result.applied_override_ids(), vec!["ONLY_GOLD"]);
}

#[test]
fn note_after_status_change_keeps_status_and_explanation() {
    let engine = engine_with(test_partner(
        &["US"],
        &[],
        Vec::new(),
        vec![
            rule("CONDITIONAL", RuleCondition::Always, OverrideEffect::AllowConditional),
            rule("ANNOTATE", RuleCondition::Always, OverrideEffect::Note),
        ],
    ));
    let ctx = context("US", "TEST", Tier::Gold, Channel::Online);

    let result = engine.evaluate(&ctx);

    assert_eq!(result.status, EvaluationStatus::Conditional);
    assert_eq!(result.exception_explanation, "CONDITIONAL description");
    assert_eq!(result.applied_override_ids(), vec!["CONDITIONAL", "ANNOTATE"]);
}

#[test]
fn note_on_eligible_outcome_updates_explanation_only() {
    let engine = engine_with(test_partner(
        &["US"],
        &[],
        Vec::new(),
        vec![rule("ANNOTATE", RuleCondition::Always, OverrideEffect::Note)],
    ));
    let ctx = context("US", "TEST", Tier::Gold, Channel::Online);

    let result = engine.evaluate(&ctx);

    assert_eq!(result.status, EvaluationStatus::Eligible);
    assert_eq!(result.exception_explanation, "ANNOTATE description");
    assert_eq!(result.raw.applied_overrides, result.applied_overrides);
}

#[test]
fn last_status_changing_match_determines_status_for_every_flag_combination() {
    let rules = vec![
        rule("PROMO_ALLOW", RuleCondition::Promo(true), OverrideEffect::Allow),
        rule("CORP_BLOCK", RuleCondition::Corporate(true), OverrideEffect::Block),
        rule("COBRAND_NOTE", RuleCondition::Cobranded(true), OverrideEffect::Note),
    ];
    let engine = engine_with(test_partner(&["US"], &[], vec![Tier::Member], rules));

    for flags in all_flag_combinations() {
        let mut ctx = context("US", "TEST", Tier::Member, Channel::Online);
        ctx.flags = flags;

        let result = engine.evaluate(&ctx);

        let expected = if flags.corporate {
            EvaluationStatus::Blocked
        } else if flags.promo {
            EvaluationStatus::Eligible
        } else {
            EvaluationStatus::Blocked
        };
        assert_eq!(result.status, expected, "{flags:?}");
        let noted = result
            .applied_overrides
            .iter()
            .any(|applied| applied.effect == OverrideEffect::Note);
        assert_eq!(noted, flags.cobranded);
    }
}
