//! YAML decoding backed by `serde-saphyr`.

use serde::de::DeserializeOwned;
use serde_saphyr::Options;

/// Parse YAML using strict boolean semantics, so `yes`/`on` stay strings.
pub(super) fn from_str<T: DeserializeOwned>(contents: &str) -> Result<T, serde_saphyr::Error> {
    serde_saphyr::from_str_with_options(
        contents,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
}
