use metrics_exporter_prometheus::PrometheusHandle;
use partner_earn::config::{AppConfig, CatalogConfig};
use partner_earn::eligibility::Registry;
use partner_earn::error::AppError;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the registry once for the lifetime of the process.
pub(crate) fn load_registry(config: &CatalogConfig) -> Result<Arc<Registry>, AppError> {
    let registry = match &config.path {
        Some(path) => {
            let registry = Registry::from_path(path)?;
            info!(path = %path.display(), partners = registry.partners().len(), "loaded partner catalog");
            registry
        }
        None => Registry::standard(),
    };
    Ok(Arc::new(registry))
}

/// Catalog selection for CLI commands: `--catalog` wins over `APP_PARTNER_CATALOG`.
pub(crate) fn cli_registry(catalog: Option<PathBuf>) -> Result<Arc<Registry>, AppError> {
    let mut config = AppConfig::load()?;
    if catalog.is_some() {
        config.catalog.path = catalog;
    }
    load_registry(&config.catalog)
}
