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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Adjectives,
    Verbs,
    Nouns,
    Adverbs,
    Phrases,
    Objects,
    #[serde(rename = "living things")]
    #[value(name = "living-things", alias = "living things")]
    LivingThings,
    Sentences,
}

impl Topic {
    /// All topics, in the order they are offered on the selection screen.
    pub const ALL: [Topic; 8] = [
        Topic::Adjectives,
        Topic::Verbs,
        Topic::Nouns,
        Topic::Adverbs,
        Topic::Phrases,
        Topic::Objects,
        Topic::LivingThings,
        Topic::Sentences,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Adjectives => "adjectives",
            Topic::Verbs => "verbs",
            Topic::Nouns => "nouns",
            Topic::Adverbs => "adverbs",
            Topic::Phrases => "phrases",
            Topic::Objects => "objects",
            Topic::LivingThings => "living things",
            Topic::Sentences => "sentences",
        }
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Topic {
    type Error = ErrorReport;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match Topic::ALL.iter().find(|topic| topic.as_str() == value) {
            Some(topic) => Ok(*topic),
            None => fail(format!("Invalid topic: {value}")),
        }
    }
}
