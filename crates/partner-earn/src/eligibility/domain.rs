use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Region code as it appears in the catalog (e.g. `US`, `JP`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCode(pub String);

impl RegionCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for earning partners.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartnerId(pub String);

impl PartnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static region metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: RegionCode,
    pub label: String,
}

/// Membership level, declared in order of seniority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Member,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Member, Tier::Silver, Tier::Gold, Tier::Platinum];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Member => "Member",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "member" => Ok(Tier::Member),
            "silver" => Ok(Tier::Silver),
            "gold" => Ok(Tier::Gold),
            "platinum" => Ok(Tier::Platinum),
            _ => Err(format!(
                "unknown tier '{raw}' (expected Member, Silver, Gold or Platinum)"
            )),
        }
    }
}

/// Purchase medium for the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Online,
    #[serde(rename = "In-app")]
    InApp,
    #[serde(rename = "In-store")]
    InStore,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Online => "Online",
            Channel::InApp => "In-app",
            Channel::InStore => "In-store",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(Channel::Online),
            "in-app" | "in_app" | "inapp" => Ok(Channel::InApp),
            "in-store" | "in_store" | "instore" => Ok(Channel::InStore),
            _ => Err(format!(
                "unknown channel '{raw}' (expected Online, In-app or In-store)"
            )),
        }
    }
}

/// Boolean context supplied by the caller alongside the transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextFlags {
    pub promo: bool,
    pub cobranded: bool,
    pub corporate: bool,
}

impl ContextFlags {
    /// Display names of the flags that are set, in a fixed order.
    pub fn active_labels(&self) -> Vec<&'static str> {
        let mut active = Vec::new();
        if self.promo {
            active.push("Promo active");
        }
        if self.cobranded {
            active.push("Co-branded card");
        }
        if self.corporate {
            active.push("Corporate booking");
        }
        active
    }
}

/// Everything the pipeline needs to judge one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationContext {
    pub region: RegionCode,
    pub partner: PartnerId,
    pub tier: Tier,
    pub channel: Channel,
    pub flags: ContextFlags,
}
