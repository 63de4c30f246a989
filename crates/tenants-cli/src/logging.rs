// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Routes tracing output to `file`; the terminal belongs to the UI.
///
/// `RUST_LOG` wins over `level` when set.
pub fn init(level: &str, file: &Path) -> Result<()> {
    let appender = file_appender(file)?;
    let filter = env_filter(level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()
        .context("install tracing subscriber")?;
    Ok(())
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level {level:?}; set [log].level or RUST_LOG")),
    }
}

fn file_appender(file: &Path) -> Result<RollingFileAppender> {
    let dir = file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = file
        .file_name()
        .ok_or_else(|| anyhow!("log file {} has no file name", file.display()))?;

    fs::create_dir_all(dir)
        .with_context(|| format!("create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| {
            format!(
                "open log file {} -- set [log].file to a writable path",
                file.display()
            )
        })
}
