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

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// A display theme. Each theme maps to a fixed [`Palette`].
#[derive(
    ValueEnum, Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    #[default]
    #[value(name = "red-black", alias = "redBlack")]
    RedBlack,
    Dark,
    Light,
}

/// The colours a theme is rendered with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub button: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::RedBlack, Theme::Dark, Theme::Light];

    /// The value submitted by the theme selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::RedBlack => "redBlack",
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::RedBlack => "Red & Black",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::RedBlack => Palette {
                background: "#0a0101",
                card: "#1a0303",
                text: "#fff",
                accent: "#ff1744",
                button: "#d50000",
            },
            Theme::Dark => Palette {
                background: "#121212",
                card: "#1e1e1e",
                text: "#e0e0e0",
                accent: "#bb86fc",
                button: "#6200ea",
            },
            Theme::Light => Palette {
                background: "#f5f5f5",
                card: "#fff",
                text: "#212121",
                accent: "#1976d2",
                button: "#0d47a1",
            },
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = ErrorReport;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match Theme::ALL.iter().find(|theme| theme.as_str() == value) {
            Some(theme) => Ok(*theme),
            None => fail(format!("Invalid theme: {value}")),
        }
    }
}

impl Palette {
    /// Renders the palette as CSS custom properties on `:root`.
    pub fn to_css(&self) -> String {
        format!(
            ":root {{ --bg: {}; --card: {}; --text: {}; --accent: {}; --btn: {}; }}",
            self.background, self.card, self.text, self.accent, self.button
        )
    }
}
