//! Codecs for configuration text.
//!
//! Input may be written in any supported format; the resolved tree is
//! always rendered as JSON.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ResolverError, ResolverResult};

#[cfg(feature = "yaml")]
mod yaml;

/// Text format of a configuration document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ConfigFormat {
    /// JSON, always available.
    #[default]
    Json,
    /// JSON5, requires the `json5` feature.
    Json5,
    /// YAML, requires the `yaml` feature.
    #[serde(alias = "yml")]
    Yaml,
    /// TOML, requires the `toml` feature (enabled by default).
    Toml,
}

impl ConfigFormat {
    /// Infer the format from a file extension, ignoring ASCII case.
    ///
    /// Returns `None` for unknown or missing extensions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_resolver::ConfigFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(ConfigFormat::from_extension(Path::new("rules.YML")), Some(ConfigFormat::Yaml));
    /// assert_eq!(ConfigFormat::from_extension(Path::new("rules")), None);
    /// ```
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Some(Self::Json),
            Some("json5") => Some(Self::Json5),
            Some("yaml" | "yml") => Some(Self::Yaml),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse `data` in this format.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::Parse`] when the text is malformed, does not
    /// match `T`, or the format's feature is disabled.
    pub fn parse<T: DeserializeOwned>(self, data: &str) -> ResolverResult<T> {
        match self {
            Self::Json => serde_json::from_str(data).map_err(|e| ResolverError::parse(self, e)),
            Self::Json5 => {
                #[cfg(feature = "json5")]
                {
                    json5::from_str(data).map_err(|e| ResolverError::parse(self, e))
                }
                #[cfg(not(feature = "json5"))]
                {
                    Err(self.disabled("json5"))
                }
            }
            Self::Yaml => {
                #[cfg(feature = "yaml")]
                {
                    yaml::from_str(data).map_err(|e| ResolverError::parse(self, e.to_string()))
                }
                #[cfg(not(feature = "yaml"))]
                {
                    Err(self.disabled("yaml"))
                }
            }
            Self::Toml => {
                #[cfg(feature = "toml")]
                {
                    toml::from_str(data).map_err(|e| ResolverError::parse(self, e))
                }
                #[cfg(not(feature = "toml"))]
                {
                    Err(self.disabled("toml"))
                }
            }
        }
    }

    #[cfg(not(all(feature = "json5", feature = "yaml", feature = "toml")))]
    fn disabled(self, feature: &str) -> ResolverError {
        ResolverError::parse(
            self,
            std::io::Error::other(format!(
                "{feature} feature disabled: enable the '{feature}' feature to support this format"
            )),
        )
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Json5 => "JSON5",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        })
    }
}

/// Render a resolved tree as JSON text.
pub(crate) fn render_json(tree: &Map<String, Value>, pretty: bool) -> ResolverResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    };
    Ok(rendered?)
}
