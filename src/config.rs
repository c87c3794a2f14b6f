use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

const CONFIG_PATH_ENV_VAR: &str = "DAYPICK_CONFIG_FILE";
const API_KEY_ENV_VAR: &str = "DAYPICK_API_KEY";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("daypick").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".daypick.toml"));
    }

    locations
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub country_code: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub time_slots: Vec<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            country_code: "PL".to_owned(),
            endpoint: "https://api.api-ninjas.com/v1/holidays".to_owned(),
            api_key: None,
            time_slots: ["11:00", "13:30", "16:00", "18:45"]
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

impl Config {
    /// Loads the first config file found, falling back to defaults when none
    /// exists. A present but malformed file is an error. The API key may
    /// come from the environment instead of the file.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let location = match path {
            Some(path) => Some(path.to_path_buf()),
            None => find_configfile_locations()
                .into_iter()
                .find(|candidate| candidate.is_file()),
        };

        let mut config = match location {
            Some(path) => toml::from_str(&fs::read_to_string(&path)?)?,
            None => Config::default(),
        };

        if config.api_key.is_none() {
            config.api_key = env::var(API_KEY_ENV_VAR).ok();
        }

        Ok(config)
    }
}
