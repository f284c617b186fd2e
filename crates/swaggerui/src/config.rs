// Copyright 2025 Alexandre D. Díaz
use serde::{Deserialize, Serialize};

/// A single API specification shown by the UI.
///
/// `url` is either an absolute URL, used as is, or a local file path. Local
/// files get their own route under `<mount>/specs/` and `url` is rewritten
/// to point at it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SpecRef {
    pub name: String,
    pub url: String,
}

impl SpecRef {
    pub fn new(name: &str, url: &str) -> SpecRef {
        SpecRef {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// A minimal Swagger UI configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// URL of an external Swagger UI configuration object. When set, the UI
    /// is configured from it alone and `spec_refs` is ignored.
    pub external_config_url: Option<String>,
    /// One spec selects `BaseLayout`, more than one selects
    /// `StandaloneLayout` with the top bar spec switcher.
    pub spec_refs: Vec<SpecRef>,
    pub deep_linking: bool,
}

/// The configuration handed to the templates: the user config with local
/// spec URLs already rewritten, plus the mount path of the UI.
#[derive(Debug, Serialize, Clone)]
pub struct UiConfig {
    #[serde(flatten)]
    pub config: Config,
    pub base_url: String,
}

impl UiConfig {
    pub fn get_base_url(&self) -> &String {
        &self.base_url
    }

    pub fn get_spec_refs(&self) -> &Vec<SpecRef> {
        &self.config.spec_refs
    }
}
