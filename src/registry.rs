// src/registry.rs
//! Provider registry: static per-company fetch/parse parameters. The core
//! only reads these; companies are added by editing the builtin table or by
//! pointing `JOB_RADAR_PROVIDERS_PATH` at a TOML file.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_PROVIDERS_PATH: &str = "JOB_RADAR_PROVIDERS_PATH";
pub const DEFAULT_PROVIDERS_PATH: &str = "config/providers.toml";

/// Closed set of known wire formats. Adding a board format is a
/// compile-time-checked addition, not a new string constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserKind {
    Workday,
    Greenhouse,
    Lever,
    Ashby,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

/// How to fetch and parse one company's listings.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderDescriptor {
    pub endpoint: String,
    #[serde(default)]
    pub method: HttpMethod,
    /// JSON payload for POST endpoints.
    #[serde(default)]
    pub body: Option<serde_json::Value>,
    pub parser: ParserKind,
    /// Field holding the raw job identifier in each record.
    pub id_field: String,
    /// Field holding the raw posting-date value in each record.
    pub date_field: String,
    /// Ashby only: records whose `teamId` differs from this are dropped.
    #[serde(default)]
    pub team_id: Option<String>,
}

impl ProviderDescriptor {
    /// Host portion of the endpoint, used by the Workday extractor to build
    /// absolute posting URLs from relative paths.
    pub fn endpoint_host(&self) -> Option<&str> {
        let rest = self
            .endpoint
            .strip_prefix("https://")
            .or_else(|| self.endpoint.strip_prefix("http://"))?;
        let host = rest.split('/').next()?;
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

/// Ordered company-key → descriptor table. Order is preserved so report
/// output and fetch scheduling stay deterministic.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<(String, ProviderDescriptor)>,
}

impl Registry {
    /// Companies the binary knows about out of the box.
    pub fn builtin() -> Self {
        let greenhouse = |board: &str, id_field: &str| ProviderDescriptor {
            endpoint: format!("https://boards-api.greenhouse.io/v1/boards/{board}/jobs"),
            method: HttpMethod::Get,
            body: None,
            parser: ParserKind::Greenhouse,
            id_field: id_field.to_string(),
            date_field: "first_published".to_string(),
            team_id: None,
        };
        Self {
            entries: vec![
                ("unbounce".into(), greenhouse("unbounce", "id")),
                ("take-two".into(), greenhouse("taketwo", "requisition_id")),
                ("samsara".into(), greenhouse("samsara", "requisition_id")),
            ],
        }
    }

    /// Load from env path / config/providers.toml, falling back to the
    /// builtin table when neither exists.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_PROVIDERS_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_PROVIDERS_PATH} points to non-existent path"));
            }
            return Self::from_path(&pb);
        }
        let default = Path::new(DEFAULT_PROVIDERS_PATH);
        if default.exists() {
            return Self::from_path(default);
        }
        Ok(Self::builtin())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading provider registry from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing provider registry at {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct Root {
            #[serde(default)]
            providers: Vec<Entry>,
        }
        #[derive(Deserialize)]
        struct Entry {
            company: String,
            #[serde(flatten)]
            descriptor: ProviderDescriptor,
        }
        let root: Root = toml::from_str(s)?;
        let entries: Vec<_> = root
            .providers
            .into_iter()
            .map(|e| (e.company, e.descriptor))
            .collect();
        if entries.is_empty() {
            return Err(anyhow!("provider registry is empty"));
        }
        Ok(Self { entries })
    }

    /// Restrict to the given company keys; an unknown key is a configuration
    /// error (fatal before any fetch begins). Empty selection keeps all.
    pub fn select(&self, companies: &[String]) -> Result<Self> {
        if companies.is_empty() {
            return Ok(self.clone());
        }
        let mut entries = Vec::with_capacity(companies.len());
        for name in companies {
            let found = self
                .entries
                .iter()
                .find(|(key, _)| key == name)
                .ok_or_else(|| anyhow!("unknown company key: {name}"))?;
            entries.push(found.clone());
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProviderDescriptor)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_is_nonempty_and_ordered() {
        let reg = Registry::builtin();
        let keys: Vec<_> = reg.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["unbounce", "take-two", "samsara"]);
    }

    #[test]
    fn select_keeps_requested_and_rejects_unknown() {
        let reg = Registry::builtin();
        let one = reg.select(&["samsara".to_string()]).unwrap();
        assert_eq!(one.len(), 1);
        assert!(reg.select(&["nope".to_string()]).is_err());
        assert_eq!(reg.select(&[]).unwrap().len(), reg.len());
    }

    #[test]
    fn toml_registry_parses_all_descriptor_fields() {
        let toml = r#"
[[providers]]
company = "clio"
endpoint = "https://clio.wd3.myworkdayjobs.com/wday/cxs/clio/ClioCareerSite/jobs"
method = "POST"
parser = "workday"
id_field = "bulletFields"
date_field = "postedOn"
body = { limit = 20, offset = 0 }

[[providers]]
company = "acme"
endpoint = "https://api.ashbyhq.com/posting-api/job-board/acme"
method = "GET"
parser = "ashby"
id_field = "id"
date_field = "publishedAt"
team_id = "eng"
"#;
        let reg = Registry::from_toml_str(toml).unwrap();
        assert_eq!(reg.len(), 2);
        let (_, clio) = reg.iter().next().unwrap();
        assert_eq!(clio.parser, ParserKind::Workday);
        assert_eq!(clio.method, HttpMethod::Post);
        assert_eq!(clio.endpoint_host(), Some("clio.wd3.myworkdayjobs.com"));
        assert!(clio.body.is_some());
        let (_, acme) = reg.iter().nth(1).unwrap();
        assert_eq!(acme.team_id.as_deref(), Some("eng"));
    }

    #[test]
    fn empty_registry_is_a_configuration_error() {
        assert!(Registry::from_toml_str("providers = []").is_err());
    }

    #[serial_test::serial]
    #[test]
    fn default_load_prefers_the_env_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("providers.toml");
        fs::write(
            &path,
            r#"
[[providers]]
company = "solo"
endpoint = "https://boards-api.greenhouse.io/v1/boards/solo/jobs"
method = "GET"
parser = "greenhouse"
id_field = "id"
date_field = "first_published"
"#,
        )
        .unwrap();

        std::env::set_var(ENV_PROVIDERS_PATH, path.display().to_string());
        let reg = Registry::load_default().unwrap();
        std::env::remove_var(ENV_PROVIDERS_PATH);

        assert_eq!(reg.len(), 1);
        assert_eq!(reg.iter().next().unwrap().0, "solo");
    }

    #[serial_test::serial]
    #[test]
    fn dangling_env_path_is_an_error() {
        std::env::set_var(ENV_PROVIDERS_PATH, "/definitely/not/here.toml");
        let res = Registry::load_default();
        std::env::remove_var(ENV_PROVIDERS_PATH);
        assert!(res.is_err());
    }
}
