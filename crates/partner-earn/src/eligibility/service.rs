use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use super::catalog::Partner;
use super::domain::{EvaluationContext, PartnerId, Region, RegionCode, Tier};
use super::evaluation::{EligibilityEngine, EvaluationResult};
use super::registry::Registry;
use super::request::{ContextError, EvaluationRequest};

/// Facade used by the HTTP router and the CLI.
#[derive(Debug, Clone)]
pub struct EligibilityService {
    engine: Arc<EligibilityEngine>,
}

impl EligibilityService {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            engine: Arc::new(EligibilityEngine::new(registry)),
        }
    }

    pub fn evaluate(&self, ctx: &EvaluationContext) -> EvaluationResult {
        self.engine.evaluate(ctx)
    }

    /// Validate a raw request and evaluate it. Malformed input never reaches the pipeline.
    pub fn evaluate_request(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationResult, ContextError> {
        let ctx = EvaluationContext::try_from(request).map_err(|error| {
            warn!(%error, "rejected evaluation context");
            error
        })?;
        Ok(self.engine.evaluate(&ctx))
    }

    pub fn partners(&self) -> Vec<PartnerView> {
        self.engine
            .registry()
            .partners()
            .iter()
            .map(PartnerView::from)
            .collect()
    }

    pub fn regions(&self) -> &[Region] {
        self.engine.registry().regions()
    }
}

/// Public description of a partner's contract configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerView {
    pub id: PartnerId,
    pub name: String,
    pub description: String,
    pub notes: String,
    pub allowed_regions: Vec<RegionCode>,
    pub blocked_regions: Vec<RegionCode>,
    pub blocked_tiers: Vec<Tier>,
    pub override_ids: Vec<String>,
}

impl From<&Partner> for PartnerView {
    fn from(partner: &Partner) -> Self {
        Self {
            id: partner.id.clone(),
            name: partner.name.clone(),
            description: partner.description.clone(),
            notes: partner.notes.clone(),
            allowed_regions: partner.allowed_regions.clone(),
            blocked_regions: partner.blocked_regions.clone(),
            blocked_tiers: partner.blocked_tiers.clone(),
            override_ids: partner.overrides.iter().map(|rule| rule.id.clone()).collect(),
        }
    }
}
