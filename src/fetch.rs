// src/fetch.rs
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::registry::{HttpMethod, ProviderDescriptor};

/// One bounded request per provider per run.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("job-radar/", env!("CARGO_PKG_VERSION"));

/// Seam between the pipeline and the network, so tests can substitute
/// fixture responses. Exactly one call per descriptor per run; retries, if
/// any, belong to the caller.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, desc: &ProviderDescriptor) -> Result<Value>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("building http client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    /// Non-2xx, network failure, timeout, and non-JSON body are all fetch
    /// errors; the caller isolates them per company.
    async fn fetch(&self, desc: &ProviderDescriptor) -> Result<Value> {
        let request = match desc.method {
            HttpMethod::Get => self.client.get(&desc.endpoint),
            HttpMethod::Post => self
                .client
                .post(&desc.endpoint)
                .json(desc.body.as_ref().unwrap_or(&Value::Null)),
        };

        let response = request
            .send()
            .await
            .with_context(|| format!("requesting {}", desc.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} returned {status}", desc.endpoint));
        }

        response
            .json::<Value>()
            .await
            .with_context(|| format!("decoding json from {}", desc.endpoint))
    }
}
