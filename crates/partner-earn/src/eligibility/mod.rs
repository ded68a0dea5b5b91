//! Partner earn eligibility: registry, three-stage decision pipeline and its HTTP surface.
//!
//! A context passes the program-wide base gate, then the partner's region/tier gate, and is
//! finally adjusted by the partner's ordered override rules. Every stage is pure and reads only
//! from the immutable [`Registry`].

pub mod catalog;
pub mod condition;
pub mod domain;
pub(crate) mod evaluation;
pub mod registry;
pub mod request;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    BaseRestriction, CatalogError, OverrideEffect, OverrideRule, Partner, PartnerCatalog,
    RegistryLoadError,
};
pub use condition::RuleCondition;
pub use domain::{Channel, ContextFlags, EvaluationContext, PartnerId, Region, RegionCode, Tier};
pub use evaluation::{
    evaluate, format_flags, AppliedOverride, EligibilityEngine, EvaluationResult,
    EvaluationStatus, PartnerSummary, RawSnapshot,
};
pub use registry::Registry;
pub use request::{ContextError, EvaluationRequest, FlagsRequest};
pub use router::eligibility_router;
pub use service::{EligibilityService, PartnerView};
