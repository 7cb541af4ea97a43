//! Optional configuration file.
//!
//! Only read when the user points at it explicitly; eventdesk never writes it.
//!
//! ```toml
//! # Category preselected on a blank form
//! default_category = "Workshop"
//!
//! # Suggested export destination
//! export_path = "exports/events.csv"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{EventDeskError, EventDeskResult};
use crate::event::Category;

static DEFAULT_EXPORT_PATH: &str = "events.csv";

fn default_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_PATH)
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, deserialize_with = "deserialize_category")]
    pub default_category: Category,

    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_category: Category::default(),
            export_path: default_export_path(),
        }
    }
}

impl Config {
    /// Load the config file at `path`.
    pub fn load(path: &Path) -> EventDeskResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            EventDeskError::Config(format!("Could not read {}: {e}", path.display()))
        })?;

        Self::parse(&contents)
            .map_err(|e| EventDeskError::Config(format!("Could not parse {}: {e}", path.display())))
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
