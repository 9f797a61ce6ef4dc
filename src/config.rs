// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env::current_dir;
use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::difficulty::Difficulty;
use crate::types::theme::Theme;

/// The name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "flashcards.toml";

#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The port the drill server listens on.
    pub port: u16,
    /// The theme a new session starts with.
    pub theme: Theme,
    /// The difficulty preselected on the selection screen.
    pub difficulty: Difficulty,
    /// Whether to open the page in a browser once the server is up.
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            theme: Theme::default(),
            difficulty: Difficulty::default(),
            open_browser: true,
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> Fallible<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads the configuration. An explicit path must exist. Without one,
    /// `flashcards.toml` in the working directory is used if present, and
    /// the defaults otherwise.
    pub fn load(path: Option<PathBuf>) -> Fallible<Self> {
        let path: PathBuf = match path {
            Some(path) => {
                if !path.exists() {
                    return fail(format!(
                        "configuration file {} does not exist.",
                        path.display()
                    ));
                }
                path
            }
            None => {
                let path = current_dir()?.join(CONFIG_FILE_NAME);
                if !path.exists() {
                    log::debug!("No configuration file, using defaults.");
                    return Ok(Config::default());
                }
                path
            }
        };
        Self::from_file(&path)
    }

    fn from_file(path: &Path) -> Fallible<Self> {
        log::debug!("Loading configuration from {}", path.display());
        let text = read_to_string(path)?;
        Self::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let config = Config::parse(
            "port = 9001\ntheme = \"light\"\ndifficulty = \"advanced\"\nopen_browser = false\n",
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                port: 9001,
                theme: Theme::Light,
                difficulty: Difficulty::Advanced,
                open_browser: false,
            }
        );
    }

    #[test]
    fn test_parse_red_black() {
        let config = Config::parse("theme = \"redBlack\"").unwrap();
        assert_eq!(config.theme, Theme::RedBlack);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = Config::parse("colour = \"blue\"").unwrap_err();
        assert!(err.to_string().starts_with("error: invalid configuration"));
    }

    #[test]
    fn test_bad_theme_is_an_error() {
        assert!(Config::parse("theme = \"neon\"").is_err());
    }

    #[test]
    fn test_load_from_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        write(&path, "port = 8123\n")?;
        let config = Config::load(Some(path))?;
        assert_eq!(config.port, 8123);
        assert!(config.open_browser);
        Ok(())
    }

    #[test]
    fn test_load_missing_explicit_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nope.toml");
        let result = Config::load(Some(path));
        assert!(result.is_err());
        Ok(())
    }
}
