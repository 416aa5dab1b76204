//! Renderer configuration.
//!
//! Holds the request-independent inputs a form build needs: where uploads
//! go, how action URLs are prefixed, and the default submission method.
//!
//! # Example YAML
//!
//! ```yaml
//! upload_base: "https://api.example.com"
//! route:
//!   scope: admin
//!   admin_prefix: /admin
//!   tenant_prefix: /merchant
//! default_method: POST
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use form_create_core::{DEFAULT_METHOD, RoutePrefix};
use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

/// Settings shared by every form built from definitions.
///
/// # Examples
///
/// ```
/// use form_create_settings::RendererConfig;
///
/// let config: RendererConfig = serde_yaml::from_str("upload_base: https://cdn.example").unwrap();
/// assert_eq!(config.upload_base, "https://cdn.example");
/// assert_eq!(config.default_method, "POST");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Prefix for the media upload endpoint.
    #[serde(default)]
    pub upload_base: String,
    /// Action URL routing.
    #[serde(default)]
    pub route: RoutePrefix,
    /// Method used when a definition does not set one.
    #[serde(default = "default_method")]
    pub default_method: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            upload_base: String::new(),
            route: RoutePrefix::default(),
            default_method: default_method(),
        }
    }
}

impl RendererConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::SettingsError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::SettingsError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}
