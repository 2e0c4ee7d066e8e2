//! Isolated working directories and environments for configuration tests.
//!
//! A [`JailSetup`] lists the files and environment variables a test needs,
//! places them inside a fresh [`figment::Jail`], and runs the test body
//! there. The jail restores the real directory and environment afterwards.
//!
//! # Examples
//!
//! ```
//! use mcmeta_json_test_helpers::figment::JailSetup;
//!
//! let contents = JailSetup::new()
//!     .file("settings.toml", "namespace = \"demo\"")
//!     .env("MCMETA_INSPECT_FORMAT", "json")
//!     .run(|| Ok(std::fs::read_to_string("settings.toml").ok()))?;
//! assert_eq!(contents.as_deref(), Some("namespace = \"demo\""));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Result, anyhow};

/// Contents of a jail, applied in order before the test body runs.
#[derive(Debug, Default, Clone)]
pub struct JailSetup<'a> {
    files: Vec<(&'a str, &'a str)>,
    env: Vec<(&'a str, &'a str)>,
}

impl<'a> JailSetup<'a> {
    /// An empty jail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `contents` to `name`, relative to the jail directory.
    #[must_use]
    pub fn file(mut self, name: &'a str, contents: &'a str) -> Self {
        self.files.push((name, contents));
        self
    }

    /// Set the environment variable `key` for the duration of the run.
    #[must_use]
    pub fn env(mut self, key: &'a str, value: &'a str) -> Self {
        self.env.push((key, value));
        self
    }

    /// Run `body` inside the prepared jail and return its output.
    ///
    /// # Errors
    ///
    /// Returns an error when a file cannot be written or `body` fails.
    pub fn run<F, T>(self, body: F) -> Result<T>
    where
        F: FnOnce() -> figment::error::Result<T>,
    {
        let mut output = None;
        figment::Jail::try_with(|jail| {
            for &(name, contents) in &self.files {
                jail.create_file(name, contents)?;
            }
            for &(key, value) in &self.env {
                jail.set_env(key, value);
            }
            output = Some(body()?);
            Ok(())
        })
        .map_err(|err| anyhow!("jailed test failed: {err}"))?;
        output.ok_or_else(|| anyhow!("jailed test produced no output"))
    }
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`],
/// so non-figment failures can leave a jailed test body with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a `map_err` adapter, which hands over the error by value"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
