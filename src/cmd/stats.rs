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
use serde::Serialize;

use crate::error::Fallible;
use crate::types::difficulty::Difficulty;
use crate::types::topic::Topic;
use crate::vocab::is_registered;
use crate::vocab::keys;
use crate::vocab::lookup;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text table.
    Table,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Table => write!(f, "table"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_vocabulary_stats(format: StatsFormat) -> Fallible<()> {
    let stats = get_stats();
    match format {
        StatsFormat::Table => {
            println!("{:<14} {:<13} {:>5}  source", "topic", "difficulty", "words");
            for key in &stats.keys {
                let source = if key.falls_back { "default" } else { "own" };
                println!(
                    "{:<14} {:<13} {:>5}  {}",
                    key.topic.as_str(),
                    key.difficulty.as_str(),
                    key.word_count,
                    source
                );
            }
            println!(
                "{} of {} keys have their own list.",
                stats.registered_key_count, stats.key_count
            );
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{stats_json}");
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    key_count: usize,
    registered_key_count: usize,
    registered_word_count: usize,
    keys: Vec<KeyStats>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStats {
    topic: Topic,
    difficulty: Difficulty,
    word_count: usize,
    /// Whether the key has no list of its own and uses the default one.
    falls_back: bool,
}

fn get_stats() -> Stats {
    let keys: Vec<KeyStats> = keys()
        .map(|key| KeyStats {
            topic: key.topic,
            difficulty: key.difficulty,
            word_count: lookup(key).len(),
            falls_back: !is_registered(key),
        })
        .collect();
    let registered: Vec<&KeyStats> = keys.iter().filter(|k| !k.falls_back).collect();
    Stats {
        key_count: keys.len(),
        registered_key_count: registered.len(),
        registered_word_count: registered.iter().map(|k| k.word_count).sum(),
        keys,
    }
}
