pub mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::Config;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

use crate::scoring::{validate_thresholds, Analyzer, DEFAULT_PAGE_URL};

/// Get the config directory path (~/.config/seo-analyzer/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("seo-analyzer"))
}

/// Get the default config file path (~/.config/seo-analyzer/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(explicit) => {
            if !explicit.exists() {
                anyhow::bail!("Config file not found at {}", explicit.display());
            }
            explicit
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                log::debug!(
                    "No config at {}, using defaults",
                    default_path.display()
                );
                return Ok(Config::default());
            }
            default_path
        }
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    log::debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Write configuration atomically, creating parent directories as needed.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

/// Validate a loaded config.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref page_url) = config.page_url {
        if let Err(e) = parse_page_url(page_url) {
            errors.push(format!("page_url: invalid '{}' - {}", page_url, e));
        }
    }

    if let Some(ref thresholds) = config.thresholds {
        if let Err(threshold_errors) = validate_thresholds(thresholds) {
            errors.extend(threshold_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse a page URL, requiring a host so link classification has something to compare.
pub fn parse_page_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    if url.host_str().is_none() {
        anyhow::bail!("URL has no host");
    }
    Ok(url)
}

/// Build an analyzer from config plus command-line overrides.
pub fn build_analyzer(
    config: &Config,
    keywords_override: Option<bool>,
    page_url_override: Option<&str>,
) -> Result<Analyzer> {
    let keywords_enabled = keywords_override
        .or(config.keywords_enabled)
        .unwrap_or(false);

    let page_url = page_url_override
        .or(config.page_url.as_deref())
        .unwrap_or(DEFAULT_PAGE_URL);
    let page_url = parse_page_url(page_url)
        .with_context(|| format!("Invalid page URL '{}'", page_url))?;

    log::debug!(
        "Analyzer: keywords {}, page {}",
        if keywords_enabled { "enabled" } else { "disabled" },
        page_url
    );

    Ok(Analyzer::new(keywords_enabled)
        .with_page_url(page_url)
        .with_thresholds(config.thresholds.clone().unwrap_or_default()))
}
