// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::{Client as HttpClient, Response};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tenants_app::{NewTenant, Tenant, TenantId};
use url::Url;

/// Blocking client for the remote tenant service.
///
/// The service exposes `GET /tenants`, `POST /tenants` and
/// `DELETE /tenants/{id}` under a common base URL.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = validate_base_url(base_url)?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn list_tenants(&self) -> Result<Vec<Tenant>> {
        let url = self.tenants_url();
        let started = Instant::now();
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;
        let response = ensure_success(response)?;

        let tenants: Vec<Tenant> = response.json().context("decode tenant list")?;
        tracing::debug!(
            %url,
            count = tenants.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "listed tenants"
        );
        Ok(tenants)
    }

    pub fn add_tenant(&self, tenant: &NewTenant) -> Result<()> {
        let url = self.tenants_url();
        let response = self
            .http
            .post(&url)
            .json(tenant)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;
        ensure_success(response)?;

        tracing::debug!(%url, name = %tenant.name, "added tenant");
        Ok(())
    }

    pub fn delete_tenant(&self, id: TenantId) -> Result<()> {
        let url = format!("{}/{id}", self.tenants_url());
        let response = self
            .http
            .delete(&url)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;
        ensure_success(response)?;

        tracing::debug!(%url, "deleted tenant");
        Ok(())
    }

    /// Confirms the service answers a list request; returns the row count.
    pub fn ping(&self) -> Result<usize> {
        let tenants = self.list_tenants()?;
        Ok(tenants.len())
    }

    fn tenants_url(&self) -> String {
        format!("{}/tenants", self.base_url)
    }
}

/// Normalizes a base URL: must be absolute http(s), trailing slashes dropped.
pub fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        bail!("service.base_url must not be empty");
    }

    let parsed = Url::parse(trimmed).with_context(|| {
        format!("service.base_url {trimmed:?} is not a valid URL -- use e.g. http://localhost:3000/api")
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!(
            "service.base_url {trimmed:?} uses unsupported scheme {:?}; use http or https",
            parsed.scheme()
        );
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        bail!("service.base_url {trimmed:?} must not carry a query string or fragment");
    }

    Ok(trimmed.to_owned())
}

fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(clean_error_response(status, &body))
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    let hint = if error.is_timeout() {
        "request timed out -- raise [service].timeout or check the service load"
    } else {
        "check [service].base_url and that the service is running"
    };
    anyhow!("cannot reach tenant service at {base_url} -- {hint} ({error})")
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(message) = parsed.error.or(parsed.message)
        && !message.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), message);
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() < 100 && !trimmed.contains('{') {
        return anyhow!("server error ({}): {}", status.as_u16(), trimmed);
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
    message: Option<String>,
}
