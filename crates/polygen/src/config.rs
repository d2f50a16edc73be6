//! Settings for `polygen`, layered from embedded defaults, an optional user
//! file, and `POLYGEN_*` environment variables.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Deserialize;

const CONFIG_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_CONFIG_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "POLYGEN";

lazy_static! {
    static ref DEFAULT_CONFIG: GenConfig =
        serde_norway::from_str(DEFAULT_CONFIG_STR).expect("error loading default configuration");
}

/// Settings for `polygen`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenConfig {
    /// Directory that `generate` writes into.
    pub output_dir: PathBuf,
    /// File name of the manifest written by `generate`.
    pub manifest_filename: String,
    /// Whether to indent JSON output.
    pub pretty: bool,
    /// Default log filter.
    pub log_filter: String,
}
impl Default for GenConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl GenConfig {
    /// Loads settings. Later sources override earlier ones: embedded
    /// defaults, then `user_file` (which must exist if given), then
    /// environment variables.
    pub fn load(user_file: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG_STR, CONFIG_FILE_FORMAT));

        if let Some(path) = user_file {
            log::debug!("loading configuration from {}", path.display());
            config = config.add_source(
                config::File::from(path)
                    .format(CONFIG_FILE_FORMAT)
                    .required(true),
            );
        }

        config = config.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .context("error loading configuration")
    }
}
