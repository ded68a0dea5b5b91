use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::catalog::{BaseRestriction, CatalogError, Partner, PartnerCatalog, RegistryLoadError};
use super::domain::{Region, RegionCode};

/// Read-only index over regions, partners and program-wide restrictions.
///
/// Built once at startup and shared behind an `Arc`; there is no mutation API.
#[derive(Debug, Clone)]
pub struct Registry {
    regions: Vec<Region>,
    partners: Vec<Partner>,
    base_restrictions: Vec<BaseRestriction>,
    region_index: HashMap<String, usize>,
    partner_index: HashMap<String, usize>,
}

impl Registry {
    pub fn standard() -> Self {
        Self::index(PartnerCatalog::standard())
    }

    pub fn from_catalog(catalog: PartnerCatalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self::index(catalog))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RegistryLoadError> {
        let catalog: PartnerCatalog = serde_json::from_str(raw)?;
        Ok(Self::from_catalog(catalog)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryLoadError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RegistryLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    fn index(catalog: PartnerCatalog) -> Self {
        let PartnerCatalog {
            regions,
            base_restrictions,
            partners,
        } = catalog;

        let region_index = regions
            .iter()
            .enumerate()
            .map(|(position, region)| (region.code.0.clone(), position))
            .collect();
        let partner_index = partners
            .iter()
            .enumerate()
            .map(|(position, partner)| (partner.id.0.clone(), position))
            .collect();

        Self {
            regions,
            partners,
            base_restrictions,
            region_index,
            partner_index,
        }
    }

    pub fn lookup_region(&self, code: &str) -> Option<&Region> {
        self.region_index
            .get(code)
            .and_then(|position| self.regions.get(*position))
    }

    pub fn lookup_partner(&self, id: &str) -> Option<&Partner> {
        self.partner_index
            .get(id)
            .and_then(|position| self.partners.get(*position))
    }

    /// Display label for a region, falling back to the raw code for unknown regions.
    pub fn region_label<'a>(&'a self, code: &'a RegionCode) -> &'a str {
        self.lookup_region(code.as_str())
            .map(|region| region.label.as_str())
            .unwrap_or_else(|| code.as_str())
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    pub fn base_restrictions(&self) -> &[BaseRestriction] {
        &self.base_restrictions
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
