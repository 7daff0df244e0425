//! Loading of scenario fixtures stored as `<root>/<scenario>/<file>`.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use config_resolver_test_helpers::fixtures::Scenario;
//!
//! let scenario = Scenario::new(Path::new("tests/fixtures"), "user-in-any-groups");
//! let input = scenario.input()?;
//! # Ok::<_, anyhow::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

const INPUT_FILE: &str = "input.json";
const OUTPUT_FILE: &str = "output.json";

/// A named scenario directory holding `input.json` and, optionally,
/// `output.json`.
#[derive(Clone, Debug)]
pub struct Scenario {
    dir: PathBuf,
}

impl Scenario {
    /// Locate `name` beneath `root`.
    #[must_use]
    pub fn new(root: &Path, name: &str) -> Self {
        Self {
            dir: root.join(name),
        }
    }

    /// Read the scenario's input document.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read.
    pub fn input(&self) -> Result<String> {
        self.read(INPUT_FILE)
    }

    /// Read the scenario's expected output document.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read.
    pub fn output(&self) -> Result<String> {
        self.read(OUTPUT_FILE)
    }

    /// Read and decode the scenario's expected output.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or does not decode
    /// into `T`.
    pub fn output_as<T: DeserializeOwned>(&self) -> Result<T> {
        let text = self.output()?;
        serde_json::from_str(&text)
            .with_context(|| format!("decode {}", self.dir.join(OUTPUT_FILE).display()))
    }

    /// Read any file from the scenario directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read.
    pub fn read(&self, file: &str) -> Result<String> {
        let path = self.dir.join(file);
        fs::read_to_string(&path).with_context(|| format!("read fixture {}", path.display()))
    }
}
