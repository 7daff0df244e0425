//! Resolver options layered from defaults and the environment.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::{ConfigFormat, ResolverResult};

/// Prefix for environment variables read by [`ResolverOptions::load`].
pub const ENV_PREFIX: &str = "CONFIG_RESOLVER_";

/// Options controlling how configuration text is read and written.
///
/// # Examples
///
/// ```rust
/// use config_resolver::{ConfigFormat, ResolverOptions};
///
/// let options = ResolverOptions::default().with_pretty(true);
/// assert_eq!(options.format, ConfigFormat::Json);
/// assert!(options.pretty);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Format of the incoming configuration text.
    pub format: ConfigFormat,
    /// Pretty-print resolved JSON output.
    pub pretty: bool,
}

impl ResolverOptions {
    /// Set the input format.
    #[must_use]
    pub const fn with_format(mut self, format: ConfigFormat) -> Self {
        self.format = format;
        self
    }

    /// Toggle pretty-printed output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Provider stack used by [`ResolverOptions::load`]: defaults first, then
    /// `CONFIG_RESOLVER_*` environment variables.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load options from the environment, falling back to defaults.
    ///
    /// Recognised variables are `CONFIG_RESOLVER_FORMAT` (`json`, `json5`,
    /// `yaml`, `toml`) and `CONFIG_RESOLVER_PRETTY` (`true`/`false`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResolverError::Options`] when a variable holds an
    /// unrecognised value.
    pub fn load() -> ResolverResult<Self> {
        let options: Self = Self::figment().extract()?;
        tracing::debug!(
            format = %options.format,
            pretty = options.pretty,
            "loaded resolver options"
        );
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::ResolverOptions;
    use crate::{ConfigFormat, ResolverError};
    use rstest::rstest;

    fn load_in_jail() -> figment::error::Result<ResolverOptions> {
        ResolverOptions::load().map_err(|err| figment::Error::from(err.to_string()))
    }

    #[rstest]
    fn defaults_without_environment() {
        figment::Jail::expect_with(|_j| {
            let options = load_in_jail()?;
            assert_eq!(options, ResolverOptions::default());
            Ok(())
        });
    }

    #[rstest]
    fn environment_overrides_defaults() {
        figment::Jail::expect_with(|j| {
            j.set_env("CONFIG_RESOLVER_FORMAT", "toml");
            j.set_env("CONFIG_RESOLVER_PRETTY", "true");
            let options = load_in_jail()?;
            assert_eq!(options.format, ConfigFormat::Toml);
            assert!(options.pretty);
            Ok(())
        });
    }

    #[rstest]
    fn yml_alias_selects_yaml() {
        figment::Jail::expect_with(|j| {
            j.set_env("CONFIG_RESOLVER_FORMAT", "yml");
            assert_eq!(load_in_jail()?.format, ConfigFormat::Yaml);
            Ok(())
        });
    }

    #[rstest]
    fn unknown_format_is_an_options_error() {
        figment::Jail::expect_with(|j| {
            j.set_env("CONFIG_RESOLVER_FORMAT", "ini");
            let err = ResolverOptions::load().expect_err("ini is not a supported format");
            assert!(matches!(err, ResolverError::Options(_)));
            Ok(())
        });
    }

    #[rstest]
    fn builders_compose() {
        let options = ResolverOptions::default()
            .with_format(ConfigFormat::Yaml)
            .with_pretty(true);
        assert_eq!(options.format, ConfigFormat::Yaml);
        assert!(options.pretty);
    }
}
