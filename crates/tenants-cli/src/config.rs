// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tenants_app::{FilterMode, SortMode};
use tracing::level_filters::LevelFilter;

pub const APP_NAME: &str = "tenants";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_SERVICE_URL: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT: &str = "5s";
const DEFAULT_LOG_LEVEL: &str = "info";
const CONFIG_PATH_ENV: &str = "TENANTS_CONFIG_PATH";
const SERVICE_URL_ENV: &str = "TENANTS_SERVICE_URL";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub service: Service,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            service: Service::default(),
            ui: Ui::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Service {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ui {
    pub default_filter: Option<String>,
    pub default_sort: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {CONFIG_PATH_ENV} to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and keep values under [service], [ui], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(base_url) = &self.service.base_url {
            tenants_client::validate_base_url(base_url)
                .with_context(|| format!("invalid [service] in {}", path.display()))?;
        }

        if let Some(timeout) = &self.service.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "service.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        if let Some(filter) = &self.ui.default_filter
            && FilterMode::parse(filter).is_none()
        {
            bail!(
                "ui.default_filter in {} must be one of: all, late, date; got {filter:?}",
                path.display()
            );
        }

        if let Some(sort) = &self.ui.default_sort
            && SortMode::parse(sort).is_none()
        {
            bail!(
                "ui.default_sort in {} must be one of: id, name, payment_status, date; got {sort:?}",
                path.display()
            );
        }

        if let Some(level) = &self.log.level
            && level.parse::<LevelFilter>().is_err()
        {
            bail!(
                "log.level in {} must be one of: off, error, warn, info, debug, trace; got {level:?}",
                path.display()
            );
        }

        if let Some(file) = &self.log.file
            && file.trim().is_empty()
        {
            bail!(
                "log.file in {} must not be empty; remove it to use the default",
                path.display()
            );
        }

        Ok(())
    }

    /// `[service].base_url`, then `TENANTS_SERVICE_URL`, then the local default.
    pub fn service_base_url(&self) -> String {
        if let Some(base_url) = &self.service.base_url {
            return base_url.trim_end_matches('/').to_owned();
        }
        match env::var(SERVICE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                value.trim().trim_end_matches('/').to_owned()
            }
            _ => DEFAULT_SERVICE_URL.to_owned(),
        }
    }

    pub fn service_timeout(&self) -> Result<Duration> {
        parse_duration(self.service.timeout.as_deref().unwrap_or(DEFAULT_TIMEOUT))
    }

    pub fn default_filter(&self) -> FilterMode {
        self.ui
            .default_filter
            .as_deref()
            .and_then(FilterMode::parse)
            .unwrap_or(FilterMode::All)
    }

    pub fn default_sort(&self) -> SortMode {
        self.ui
            .default_sort
            .as_deref()
            .and_then(SortMode::parse)
            .unwrap_or(SortMode::Id)
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.log.file {
            Some(file) => Ok(PathBuf::from(file)),
            None => default_log_path(),
        }
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# tenants config\n# Place this file at: {}\n\nversion = 1\n\n[service]\n# {SERVICE_URL_ENV} is used when base_url is unset\nbase_url = \"{}\"\ntimeout = \"{}\"\n\n[ui]\n# all | late | date\ndefault_filter = \"all\"\n# id | name | payment_status | date\ndefault_sort = \"id\"\n\n[log]\n# RUST_LOG takes precedence when set\nlevel = \"{}\"\n# Optional. Default is platform data dir (for example ~/.local/share/tenants/tenants.log)\n# file = \"/absolute/path/to/tenants.log\"\n",
            path.display(),
            DEFAULT_SERVICE_URL,
            DEFAULT_TIMEOUT,
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn default_log_path() -> Result<PathBuf> {
    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set [log].file to an absolute path")
    })?;
    Ok(data_root.join(APP_NAME).join("tenants.log"))
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        let secs = mins.checked_mul(60).ok_or_else(|| {
            anyhow!("timeout duration {raw:?} is out of range; use for example 5s")
        })?;
        return Ok(Duration::from_secs(secs));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 5s)")
}
