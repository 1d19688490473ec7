//! Site configuration.
//!
//! The defaults of [`Site`] describe lascorbe.com. A `site.yml` file next to the content (or the file pointed to by
//! `LASCORBE_CONFIG`) can override any of them. The configuration is loaded once in `main`, before the build starts,
//! and only read afterwards through [`site()`].
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use lascorbe_theme::Site;

use crate::errors::ConfigError;

pub const CONFIG_FILE: &str = "site.yml";
pub const CONFIG_ENV: &str = "LASCORBE_CONFIG";

static SITE: OnceLock<Site> = OnceLock::new();

pub fn config_path() -> PathBuf {
    env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

/// Loads the site configuration from `path`. A missing file is not an error and gives the default configuration.
pub fn load_site(path: &Path) -> Result<Site, ConfigError> {
    if !path.exists() {
        return validate(Site::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let site: Site = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate(site)
}

fn validate(mut site: Site) -> Result<Site, ConfigError> {
    if !(site.url.starts_with("https://") || site.url.starts_with("http://")) {
        return Err(ConfigError::InvalidUrl { url: site.url });
    }

    if site.name.trim().is_empty() {
        return Err(ConfigError::EmptyName);
    }

    site.url = site.url.trim_end_matches('/').to_string();

    Ok(site)
}

/// Stores the configuration for the rest of the build. Only the first call has an effect.
pub fn init(site: Site) -> &'static Site {
    SITE.get_or_init(|| site)
}

pub fn site() -> &'static Site {
    SITE.get_or_init(Site::default)
}
