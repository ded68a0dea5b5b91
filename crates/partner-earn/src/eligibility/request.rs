use serde::{Deserialize, Serialize};

use super::domain::{Channel, ContextFlags, EvaluationContext, PartnerId, RegionCode, Tier};

/// Wire shape accepted from callers before validation.
///
/// Every field is optional here so that missing input is reported as a [`ContextError`]
/// instead of being defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub region: Option<String>,
    pub partner: Option<String>,
    pub tier: Option<String>,
    pub channel: Option<String>,
    pub flags: Option<FlagsRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagsRequest {
    pub promo: Option<bool>,
    pub cobranded: Option<bool>,
    pub corporate: Option<bool>,
}

/// Malformed evaluation input. Distinct from a `Blocked` outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("invalid tier: {0}")]
    InvalidTier(String),
    #[error("invalid channel: {0}")]
    InvalidChannel(String),
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ContextError> {
    let value = value.ok_or(ContextError::MissingField(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContextError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

impl TryFrom<EvaluationRequest> for EvaluationContext {
    type Error = ContextError;

    fn try_from(request: EvaluationRequest) -> Result<Self, Self::Error> {
        let region = required(request.region, "region")?;
        let partner = required(request.partner, "partner")?;
        let tier = required(request.tier, "tier")?
            .parse::<Tier>()
            .map_err(ContextError::InvalidTier)?;
        let channel = required(request.channel, "channel")?
            .parse::<Channel>()
            .map_err(ContextError::InvalidChannel)?;

        let flags = request.flags.ok_or(ContextError::MissingField("flags"))?;
        let flags = ContextFlags {
            promo: flags.promo.ok_or(ContextError::MissingField("flags.promo"))?,
            cobranded: flags
                .cobranded
                .ok_or(ContextError::MissingField("flags.cobranded"))?,
            corporate: flags
                .corporate
                .ok_or(ContextError::MissingField("flags.corporate"))?,
        };

        Ok(EvaluationContext {
            region: RegionCode::new(region),
            partner: PartnerId::new(partner),
            tier,
            channel,
            flags,
        })
    }
}

impl From<&EvaluationContext> for EvaluationRequest {
    fn from(ctx: &EvaluationContext) -> Self {
        Self {
            region: Some(ctx.region.0.clone()),
            partner: Some(ctx.partner.0.clone()),
            tier: Some(ctx.tier.label().to_string()),
            channel: Some(ctx.channel.label().to_string()),
            flags: Some(FlagsRequest {
                promo: Some(ctx.flags.promo),
                cobranded: Some(ctx.flags.cobranded),
                corporate: Some(ctx.flags.corporate),
            }),
        }
    }
}
