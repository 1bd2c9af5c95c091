use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::{debug, warn};

pub const ENV_RESULTS_PER_PAGE: &str = "PAGER_RESULTS_PER_PAGE";
pub const ENV_PAGE_RANGE: &str = "PAGER_PAGE_RANGE";
pub const ENV_INDEX: &str = "PAGER_INDEX";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub pager: PagerConfig,
}

/// Pager settings; an unset field means "use the pager's default".
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct PagerConfig {
    #[serde(default)]
    pub results_per_page: Option<u64>,
    #[serde(default)]
    pub page_range: Option<u64>,
    #[serde(default)]
    pub index: Option<String>,
}

/// `CONFIG_PATH` (after loading `.env`), falling back to `config.toml`.
pub fn config_path() -> String {
    // .env is optional
    dotenvy::dotenv().ok();
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("cannot read {path}: {e}"))?;
    let cfg = from_toml_str(&content)?;
    debug!(%path, "pager configuration loaded");
    Ok(cfg)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            warn!(%path, "configuration file not found; using pager defaults");
            AppConfig::default()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.pager.apply_overrides(|key| std::env::var(key).ok())?;
        self.pager.normalize();
        Ok(())
    }
}

impl PagerConfig {
    /// Override fields from `lookup` (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_RESULTS_PER_PAGE) {
            self.results_per_page = Some(parse_count(ENV_RESULTS_PER_PAGE, &v)?);
        }
        if let Some(v) = lookup(ENV_PAGE_RANGE) {
            self.page_range = Some(parse_count(ENV_PAGE_RANGE, &v)?);
        }
        if let Some(v) = lookup(ENV_INDEX) {
            self.index = Some(v);
        }
        Ok(())
    }

    pub fn normalize(&mut self) {
        self.index = self
            .index
            .take()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
    }
}

fn parse_count(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| anyhow!("{key} must be a non-negative integer, got {raw:?}"))
}
