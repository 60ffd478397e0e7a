use crate::{APP_NAME, Res, error::Error, git::status::FormatOptions};
use etcetera::BaseStrategy;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{
    Deserialize, Deserializer,
    de::{self, Visitor},
};
use std::{
    fmt,
    path::{Path, PathBuf},
};

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
const ENV_PREFIX: &str = "REPOSTAT_";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub diff: FormatOptions,
    pub upstream: FormatOptions,
    pub files: FileConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    /// Between a file name and its directory.
    #[serde(deserialize_with = "text")]
    pub separator: String,
    /// Show where renamed files came from.
    pub include_original: bool,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("Failed to parse default_config.toml")
    }
}

pub fn init_config() -> Res<Config> {
    let path = user_config_path();
    if path.is_none() {
        log::error!("Couldn't determine config directory, using defaults");
    }

    load_config(path.as_deref())
}

fn user_config_path() -> Option<PathBuf> {
    etcetera::choose_base_strategy()
        .ok()
        .map(|strategy| strategy.config_dir().join(APP_NAME).join("config.toml"))
}

/// Defaults, then `user_config` if it exists, then `REPOSTAT_` environment variables
/// (`REPOSTAT_DIFF__EXPAND=true` sets `diff.expand`).
pub(crate) fn load_config(user_config: Option<&Path>) -> Res<Config> {
    let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

    if let Some(path) = user_config {
        log::debug!("Reading config from {:?}", path);
        figment = figment.merge(Toml::file(path));
    }

    let config = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Error::Config)?;

    Ok(config)
}

/// Reads a text option from any scalar. Environment values are parsed, so
/// `REPOSTAT_DIFF__EMPTY=0` arrives as a number and `=true` as a bool.
pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct TextVisitor;

    impl Visitor<'_> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i128<E: de::Error>(self, value: i128) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u128<E: de::Error>(self, value: u128) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}
