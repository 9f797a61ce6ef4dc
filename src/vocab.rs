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

//! The built-in vocabulary.
//!
//! Only a few keys of the topic/difficulty matrix have content. Every other
//! key silently resolves to [`DEFAULT_KEY`]'s list, so a lookup always
//! yields something to drill.

use crate::types::difficulty::Difficulty;
use crate::types::topic::Topic;
use crate::types::word_pair::WordPair;

/// The lookup key of a vocabulary list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct VocabularyKey {
    pub topic: Topic,
    pub difficulty: Difficulty,
}

impl VocabularyKey {
    pub const fn new(topic: Topic, difficulty: Difficulty) -> Self {
        Self { topic, difficulty }
    }
}

/// The key whose list is used for every unregistered key.
pub const DEFAULT_KEY: VocabularyKey = VocabularyKey::new(Topic::Adjectives, Difficulty::Beginner);

const ADJECTIVES_BEGINNER: &[WordPair] = &[
    WordPair::new("grand", "big"),
    WordPair::new("petit", "small"),
    WordPair::new("bon", "good"),
    WordPair::new("mauvais", "bad"),
    WordPair::new("beau", "beautiful"),
    WordPair::new("vieux", "old"),
    WordPair::new("jeune", "young"),
    WordPair::new("nouveau", "new"),
    WordPair::new("rouge", "red"),
    WordPair::new("bleu", "blue"),
    WordPair::new("vert", "green"),
    WordPair::new("noir", "black"),
    WordPair::new("blanc", "white"),
    WordPair::new("gris", "gray"),
    WordPair::new("jaune", "yellow"),
    WordPair::new("chaud", "hot"),
    WordPair::new("froid", "cold"),
    WordPair::new("long", "long"),
    WordPair::new("court", "short"),
    WordPair::new("haut", "high"),
];

const VERBS_BEGINNER: &[WordPair] = &[
    WordPair::new("être", "to be"),
    WordPair::new("avoir", "to have"),
    WordPair::new("faire", "to do/make"),
    WordPair::new("aller", "to go"),
    WordPair::new("voir", "to see"),
    WordPair::new("venir", "to come"),
    WordPair::new("pouvoir", "to be able"),
    WordPair::new("vouloir", "to want"),
    WordPair::new("savoir", "to know"),
    WordPair::new("devoir", "must"),
    WordPair::new("prendre", "to take"),
    WordPair::new("donner", "to give"),
    WordPair::new("parler", "to speak"),
    WordPair::new("manger", "to eat"),
    WordPair::new("boire", "to drink"),
    WordPair::new("dormir", "to sleep"),
    WordPair::new("ouvrir", "to open"),
    WordPair::new("fermer", "to close"),
    WordPair::new("lire", "to read"),
    WordPair::new("écrire", "to write"),
];

const NOUNS_BEGINNER: &[WordPair] = &[
    WordPair::new("maison", "house"),
    WordPair::new("voiture", "car"),
    WordPair::new("livre", "book"),
    WordPair::new("table", "table"),
    WordPair::new("chaise", "chair"),
    WordPair::new("porte", "door"),
    WordPair::new("fenêtre", "window"),
    WordPair::new("pain", "bread"),
    WordPair::new("eau", "water"),
    WordPair::new("café", "coffee"),
    WordPair::new("thé", "tea"),
    WordPair::new("lait", "milk"),
    WordPair::new("fromage", "cheese"),
    WordPair::new("pomme", "apple"),
    WordPair::new("chat", "cat"),
    WordPair::new("chien", "dog"),
    WordPair::new("oiseau", "bird"),
    WordPair::new("poisson", "fish"),
    WordPair::new("arbre", "tree"),
];

const REGISTERED: &[(VocabularyKey, &[WordPair])] = &[
    (DEFAULT_KEY, ADJECTIVES_BEGINNER),
    (
        VocabularyKey::new(Topic::Verbs, Difficulty::Beginner),
        VERBS_BEGINNER,
    ),
    (
        VocabularyKey::new(Topic::Nouns, Difficulty::Beginner),
        NOUNS_BEGINNER,
    ),
];

fn registered(key: VocabularyKey) -> Option<&'static [WordPair]> {
    REGISTERED
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, words)| *words)
}

/// Returns the list registered for `key`, or the default list if there is
/// none.
pub fn lookup(key: VocabularyKey) -> &'static [WordPair] {
    match registered(key) {
        Some(words) => words,
        None => {
            log::debug!(
                "No vocabulary for {}/{}, using {}/{}.",
                key.topic,
                key.difficulty,
                DEFAULT_KEY.topic,
                DEFAULT_KEY.difficulty
            );
            ADJECTIVES_BEGINNER
        }
    }
}

/// Whether `key` has its own list, rather than falling back.
pub fn is_registered(key: VocabularyKey) -> bool {
    registered(key).is_some()
}

/// Every key in the topic/difficulty matrix, topic-major.
pub fn keys() -> impl Iterator<Item = VocabularyKey> {
    Topic::ALL.into_iter().flat_map(|topic| {
        Difficulty::ALL
            .into_iter()
            .map(move |difficulty| VocabularyKey::new(topic, difficulty))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_registered_lists() {
        let nouns = lookup(VocabularyKey::new(Topic::Nouns, Difficulty::Beginner));
        assert_eq!(nouns.len(), 19);
        assert_eq!(nouns[0], WordPair::new("maison", "house"));
        let verbs = lookup(VocabularyKey::new(Topic::Verbs, Difficulty::Beginner));
        assert_eq!(verbs.len(), 20);
        assert_eq!(verbs[19], WordPair::new("écrire", "to write"));
        assert_eq!(lookup(DEFAULT_KEY).len(), 20);
    }

    #[test]
    fn test_unregistered_keys_fall_back() {
        let default = lookup(DEFAULT_KEY);
        for key in keys().filter(|key| !is_registered(*key)) {
            assert_eq!(lookup(key), default);
        }
        assert_eq!(
            lookup(VocabularyKey::new(Topic::Adverbs, Difficulty::Beginner)),
            default
        );
        assert_eq!(
            lookup(VocabularyKey::new(Topic::Nouns, Difficulty::Advanced)),
            default
        );
    }

    #[test]
    fn test_keys_cover_the_matrix() {
        let all: HashSet<VocabularyKey> = keys().collect();
        assert_eq!(all.len(), 24);
        assert_eq!(keys().filter(|key| is_registered(*key)).count(), 3);
    }

    #[test]
    fn test_lists_have_no_duplicates() {
        for (_, words) in REGISTERED {
            let sources: HashSet<&str> = words.iter().map(|w| w.source()).collect();
            assert_eq!(sources.len(), words.len());
        }
    }
}
