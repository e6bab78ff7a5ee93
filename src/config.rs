//! Configuration management for pulsepilot.
//!
//! This module handles loading, merging, and validating configuration from files
//! and CLI arguments. It supports YAML, JSON, and TOML formats.

use crate::cli::{Args, ConfigFormat};
use pulsepilot::chart::DEFAULT_CHART_WIDTH;
use pulsepilot::report::DEFAULT_REPORT_FILE;
use pulsepilot::vendor::{DEFAULT_VENDOR_API_URL, DEFAULT_VENDOR_TIMEOUT_SECONDS};
use pulsepilot::Platform;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

// Default configuration constants
pub const DEFAULT_TRACK_DURATION_SECONDS: u64 = 30;
pub const DEFAULT_TRACK_INTERVAL_MS: u64 = 1000;
pub const MIN_CHART_WIDTH: usize = 10;

/// Effective configuration; unset fields fall back to the defaults above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Scanning
    /// "linux" | "windows" | None (detect)
    pub platform: Option<String>,
    /// Replay this capture instead of running nmcli/netsh
    #[serde(alias = "scan-file")]
    pub scan_file: Option<PathBuf>,

    // Tracking
    #[serde(alias = "track-duration-seconds")]
    pub track_duration_seconds: Option<u64>,
    #[serde(alias = "track-interval-ms")]
    pub track_interval_ms: Option<u64>,

    // Reporting
    #[serde(alias = "report-file")]
    pub report_file: Option<PathBuf>,
    #[serde(alias = "chart-width")]
    pub chart_width: Option<usize>,

    // Vendor lookup
    #[serde(alias = "enable-vendor-lookup")]
    pub enable_vendor_lookup: Option<bool>,
    #[serde(alias = "vendor-api-url")]
    pub vendor_api_url: Option<String>,
    #[serde(alias = "vendor-timeout-seconds")]
    pub vendor_timeout_seconds: Option<u64>,

    // Logging
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: None,
            scan_file: None,
            track_duration_seconds: Some(DEFAULT_TRACK_DURATION_SECONDS),
            track_interval_ms: Some(DEFAULT_TRACK_INTERVAL_MS),
            report_file: Some(PathBuf::from(DEFAULT_REPORT_FILE)),
            chart_width: Some(DEFAULT_CHART_WIDTH),
            enable_vendor_lookup: Some(true),
            vendor_api_url: Some(DEFAULT_VENDOR_API_URL.to_string()),
            vendor_timeout_seconds: Some(DEFAULT_VENDOR_TIMEOUT_SECONDS),
            log_level: Some("info".into()),
        }
    }
}

impl Config {
    pub fn track_duration_seconds(&self) -> u64 {
        self.track_duration_seconds
            .unwrap_or(DEFAULT_TRACK_DURATION_SECONDS)
    }

    pub fn track_interval_ms(&self) -> u64 {
        self.track_interval_ms.unwrap_or(DEFAULT_TRACK_INTERVAL_MS)
    }

    pub fn report_file(&self) -> PathBuf {
        self.report_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE))
    }

    pub fn chart_width(&self) -> usize {
        self.chart_width.unwrap_or(DEFAULT_CHART_WIDTH)
    }

    pub fn vendor_api_url(&self) -> &str {
        self.vendor_api_url
            .as_deref()
            .unwrap_or(DEFAULT_VENDOR_API_URL)
    }

    pub fn vendor_timeout_seconds(&self) -> u64 {
        self.vendor_timeout_seconds
            .unwrap_or(DEFAULT_VENDOR_TIMEOUT_SECONDS)
    }
}

/// Validate effective config (used by --check-config and at startup)
pub fn validate_effective_config(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(platform) = cfg.platform.as_deref() {
        Platform::from_os_name(platform)?;
    }

    if cfg.track_duration_seconds == Some(0) {
        return Err("track_duration_seconds must be greater than 0".into());
    }
    if cfg.track_interval_ms == Some(0) {
        return Err("track_interval_ms must be greater than 0".into());
    }

    if let Some(width) = cfg.chart_width {
        if width < MIN_CHART_WIDTH {
            return Err(format!(
                "chart_width must be at least {}, got {}",
                MIN_CHART_WIDTH, width
            )
            .into());
        }
    }

    if let Some(path) = &cfg.report_file {
        if path.as_os_str().is_empty() {
            return Err("report_file must not be empty".into());
        }
    }

    if let Some(url) = cfg.vendor_api_url.as_deref() {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(format!(
                "Invalid vendor_api_url '{}', expected an http:// or https:// URL",
                url
            )
            .into());
        }
    }

    if let Some(path) = &cfg.scan_file {
        if !path.exists() {
            return Err(format!("Scan capture file not found: {}", path.display()).into());
        }
    }

    Ok(())
}

/// Resolves configuration from CLI args, config file, and defaults.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref())?
    };

    if let Some(platform) = &args.platform {
        config.platform = Some(platform.clone());
    }
    if let Some(scan_file) = &args.scan_file {
        config.scan_file = Some(scan_file.clone());
    }
    if let Some(report_file) = &args.report_file {
        config.report_file = Some(report_file.clone());
    }
    if let Some(url) = &args.vendor_api_url {
        config.vendor_api_url = Some(url.clone());
    }
    if args.disable_vendor_lookup {
        config.enable_vendor_lookup = Some(false);
    }
    if let Some(width) = args.chart_width {
        config.chart_width = Some(width);
    }

    Ok(config)
}

/// Enhanced configuration loading with multiple format support
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = if let Some(p) = path {
        if !p.exists() {
            return Err(format!("Config file not found: {}", p.display()).into());
        }
        p.to_path_buf()
    } else {
        // Try default locations
        let defaults = [
            "/etc/pulsepilot/pulsepilot.yaml",
            "/etc/pulsepilot/pulsepilot.yml",
            "/etc/pulsepilot/pulsepilot.json",
            "./pulsepilot.yaml",
            "./pulsepilot.yml",
            "./pulsepilot.json",
            "./pulsepilot.toml",
        ];

        match defaults.iter().find(|p| Path::new(p).exists()) {
            Some(p) => PathBuf::from(p),
            None => return Ok(Config::default()),
        }
    };

    let content = fs::read_to_string(&path)?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {
            let config: Config = serde_json::from_str(&content)?;
            info!("Loaded JSON configuration from: {}", path.display());
            Ok(config)
        }
        Some("toml") => {
            let config: Config = toml::from_str(&content)?;
            info!("Loaded TOML configuration from: {}", path.display());
            Ok(config)
        }
        _ => {
            // Default to YAML
            let config: Config = serde_yaml::from_str(&content)?;
            info!("Loaded YAML configuration from: {}", path.display());
            Ok(config)
        }
    }
}

/// Renders configuration in the requested format.
pub fn render_config(
    config: &Config,
    format: &ConfigFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    })
}

/// Shows configuration in requested format
pub fn show_config(config: &Config, format: ConfigFormat) -> Result<(), Box<dyn std::error::Error>> {
    let output = render_config(config, &format)?;
    println!("{output}");
    Ok(())
}
