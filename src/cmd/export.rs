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

use serde::Serialize;

use crate::error::Fallible;
use crate::types::difficulty::Difficulty;
use crate::types::topic::Topic;
use crate::types::word_pair::WordPair;
use crate::vocab::VocabularyKey;
use crate::vocab::is_registered;
use crate::vocab::lookup;

pub fn export_vocabulary(topic: Topic, difficulty: Difficulty) -> Fallible<()> {
    let export = get_export(VocabularyKey::new(topic, difficulty));
    let json: String = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export {
    topic: Topic,
    difficulty: Difficulty,
    falls_back: bool,
    words: &'static [WordPair],
}

fn get_export(key: VocabularyKey) -> Export {
    Export {
        topic: key.topic,
        difficulty: key.difficulty,
        falls_back: !is_registered(key),
        words: lookup(key),
    }
}
