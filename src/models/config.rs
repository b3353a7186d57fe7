//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::recursion::RecursionPolicy;

fn default_locale() -> String {
    "en".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// YAML file holding the entities, field settings and translations.
    pub content_file: String,
    pub secret: String,
    /// Interface language of pager labels.
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub recursion_policy: RecursionPolicy,
}
