use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::condition::RuleCondition;
use super::domain::{Channel, PartnerId, Region, RegionCode, Tier};

/// Action an override applies once its condition matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverrideEffect {
    Allow,
    Block,
    AllowConditional,
    Note,
}

impl OverrideEffect {
    pub fn label(&self) -> &'static str {
        match self {
            OverrideEffect::Allow => "allow",
            OverrideEffect::Block => "block",
            OverrideEffect::AllowConditional => "allow-conditional",
            OverrideEffect::Note => "note",
        }
    }
}

impl fmt::Display for OverrideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Partner-specific exception evaluated after the region/tier gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    pub id: String,
    pub description: String,
    #[serde(rename = "when")]
    pub condition: RuleCondition,
    pub effect: OverrideEffect,
}

/// Contract configuration for one earning partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub allowed_regions: Vec<RegionCode>,
    #[serde(default)]
    pub blocked_regions: Vec<RegionCode>,
    #[serde(default)]
    pub blocked_tiers: Vec<Tier>,
    #[serde(default)]
    pub notes: String,
    /// Declaration order is significant: later matches overwrite earlier ones.
    #[serde(default)]
    pub overrides: Vec<OverrideRule>,
}

/// Program-wide restriction applied before any partner logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRestriction {
    pub id: String,
    pub reason: String,
    #[serde(rename = "when")]
    pub condition: RuleCondition,
}

/// Authoring shape of the registry, as found in JSON catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartnerCatalog {
    pub regions: Vec<Region>,
    #[serde(default)]
    pub base_restrictions: Vec<BaseRestriction>,
    pub partners: Vec<Partner>,
}

/// Structural problems detected while indexing a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains an empty {0} identifier")]
    EmptyIdentifier(&'static str),
    #[error("region '{0}' is declared more than once")]
    DuplicateRegion(String),
    #[error("partner '{0}' is declared more than once")]
    DuplicatePartner(String),
    #[error("partner '{partner}' declares override '{rule}' more than once")]
    DuplicateOverride { partner: String, rule: String },
    #[error("base restriction '{0}' is declared more than once")]
    DuplicateBaseRestriction(String),
}

/// Failure to read or parse a catalog source.
#[derive(Debug, thiserror::Error)]
pub enum RegistryLoadError {
    #[error("unable to read partner catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("partner catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl PartnerCatalog {
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut regions = HashSet::new();
        for region in &self.regions {
            if region.code.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier("region"));
            }
            if !regions.insert(region.code.as_str()) {
                return Err(CatalogError::DuplicateRegion(region.code.0.clone()));
            }
        }

        let mut restrictions = HashSet::new();
        for restriction in &self.base_restrictions {
            if restriction.id.trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier("base restriction"));
            }
            if !restrictions.insert(restriction.id.as_str()) {
                return Err(CatalogError::DuplicateBaseRestriction(
                    restriction.id.clone(),
                ));
            }
        }

        let mut partners = HashSet::new();
        for partner in &self.partners {
            if partner.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier("partner"));
            }
            if !partners.insert(partner.id.as_str()) {
                return Err(CatalogError::DuplicatePartner(partner.id.0.clone()));
            }

            let mut rules = HashSet::new();
            for rule in &partner.overrides {
                if rule.id.trim().is_empty() {
                    return Err(CatalogError::EmptyIdentifier("override"));
                }
                if !rules.insert(rule.id.as_str()) {
                    return Err(CatalogError::DuplicateOverride {
                        partner: partner.id.0.clone(),
                        rule: rule.id.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Built-in program configuration.
    pub fn standard() -> Self {
        Self {
            regions: vec![
                region("US", "United States"),
                region("EU", "Europe"),
                region("UK", "United Kingdom"),
                region("JP", "Japan"),
            ],
            base_restrictions: vec![BaseRestriction {
                id: "JP_IN_STORE_DISABLED".to_string(),
                reason: "Base program is not enabled for in-store transactions in JP in this simplified model.".to_string(),
                condition: RuleCondition::all([
                    RuleCondition::region("JP"),
                    RuleCondition::Channel(Channel::InStore),
                ]),
            }],
            partners: vec![aero(), mart(), gstay(), stream()],
        }
    }
}

fn region(code: &str, label: &str) -> Region {
    Region {
        code: RegionCode::new(code),
        label: label.to_string(),
    }
}

fn regions(codes: &[&str]) -> Vec<RegionCode> {
    codes.iter().copied().map(RegionCode::new).collect()
}

fn rule(
    id: &str,
    description: &str,
    condition: RuleCondition,
    effect: OverrideEffect,
) -> OverrideRule {
    OverrideRule {
        id: id.to_string(),
        description: description.to_string(),
        condition,
        effect,
    }
}

fn aero() -> Partner {
    Partner {
        id: PartnerId::new("AERO"),
        name: "AeroAir Flights".to_string(),
        description: "Airline partner, strong in US/EU. Tighter rules in JP.".to_string(),
        allowed_regions: regions(&["US", "EU", "UK"]),
        blocked_regions: regions(&["JP"]),
        blocked_tiers: vec![Tier::Member],
        notes: "Standard airline earn. No earn in JP. Requires at least Silver for partner-funded campaigns.".to_string(),
        overrides: vec![rule(
            "AERO_EU_PROMO_MEMBER",
            "EU promo temporarily allows Members to earn if a promotional window is active.",
            RuleCondition::all([
                RuleCondition::region("EU"),
                RuleCondition::TierIn(vec![Tier::Member]),
                RuleCondition::Promo(true),
            ]),
            OverrideEffect::Allow,
        )],
    }
}

fn mart() -> Partner {
    Partner {
        id: PartnerId::new("MART"),
        name: "MetroMart Retail".to_string(),
        description: "Grocery / retail partner, US-only.".to_string(),
        allowed_regions: regions(&["US"]),
        blocked_regions: Vec::new(),
        blocked_tiers: Vec::new(),
        notes: "Everyday retail earn in US. No cross-border earn. Corporate accounts do not earn here.".to_string(),
        overrides: vec![rule(
            "MART_CORPORATE_BLOCK",
            "Corporate accounts are excluded from earning at MetroMart.",
            RuleCondition::Corporate(true),
            OverrideEffect::Block,
        )],
    }
}

fn gstay() -> Partner {
    Partner {
        id: PartnerId::new("GSTAY"),
        name: "GlobalStay Hotels".to_string(),
        description: "Hotel chain with global footprint and nuanced JP handling.".to_string(),
        allowed_regions: regions(&["US", "EU", "UK", "JP"]),
        blocked_regions: Vec::new(),
        blocked_tiers: Vec::new(),
        notes: "JP is a stay-only market: members can book but do not normally earn, unless a Gold+ promo is active.".to_string(),
        overrides: vec![
            rule(
                "GSTAY_JP_BLOCK_DEFAULT",
                "In JP, base rules treat GlobalStay as stay-only (no earn) unless a higher-tier promo is active.",
                RuleCondition::all([RuleCondition::region("JP"), RuleCondition::Promo(false)]),
                OverrideEffect::Block,
            ),
            rule(
                "GSTAY_JP_GOLD_PROMO",
                "In JP, Gold and Platinum members can earn during a promotional window.",
                RuleCondition::all([
                    RuleCondition::region("JP"),
                    RuleCondition::Promo(true),
                    RuleCondition::TierIn(vec![Tier::Gold, Tier::Platinum]),
                ]),
                OverrideEffect::AllowConditional,
            ),
        ],
    }
}

fn stream() -> Partner {
    Partner {
        id: PartnerId::new("STREAM"),
        name: "StreamFlix Media".to_string(),
        description: "Subscription media partner with channel restrictions.".to_string(),
        allowed_regions: regions(&["US", "EU"]),
        blocked_regions: regions(&["JP"]),
        blocked_tiers: Vec::new(),
        notes: "Earn allowed for subscription payments in US/EU via online or in-app only. No in-store earn.".to_string(),
        overrides: vec![
            rule(
                "STREAM_CHANNEL_BLOCK",
                "In-store channel is never eligible for StreamFlix.",
                RuleCondition::Channel(Channel::InStore),
                OverrideEffect::Block,
            ),
            rule(
                "STREAM_COBRANDED_BOOST",
                "Co-branded card usage is highlighted but does not change eligibility in this simplified model.",
                RuleCondition::Cobranded(true),
                OverrideEffect::Note,
            ),
        ],
    }
}
