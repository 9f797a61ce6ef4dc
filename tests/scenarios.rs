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

use std::collections::HashSet;

use flashcards::session::Action;
use flashcards::session::MAX_DECK_SIZE;
use flashcards::session::Mode;
use flashcards::session::Session;
use flashcards::session::View;
use flashcards::types::difficulty::Difficulty;
use flashcards::types::topic::Topic;
use flashcards::types::word_pair::WordPair;
use flashcards::vocab::DEFAULT_KEY;
use flashcards::vocab::VocabularyKey;
use flashcards::vocab::lookup;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sources(words: &[WordPair]) -> HashSet<&'static str> {
    words.iter().map(|w| w.source()).collect()
}

#[test]
fn nouns_deck_is_a_permutation_of_all_nouns() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = Session::default();
    session.apply(
        Action::StartSession(Topic::Nouns, Difficulty::Beginner),
        &mut rng,
    );
    let nouns = lookup(VocabularyKey::new(Topic::Nouns, Difficulty::Beginner));
    assert_eq!(session.deck().len(), 19);
    assert_eq!(sources(session.deck()), sources(nouns));
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.mode(), Mode::Flashcards);
}

#[test]
fn needs_help_cards_are_reviewed_in_visitation_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = Session::default();
    session.apply(
        Action::StartSession(Topic::Verbs, Difficulty::Beginner),
        &mut rng,
    );
    session.apply(Action::RevealAnswer, &mut rng);
    for _ in 0..3 {
        session.apply(Action::MarkNeedsHelp, &mut rng);
    }
    session.apply(Action::OpenReview, &mut rng);
    assert_eq!(session.review_list(), &session.deck()[..3]);
}

#[test]
fn completing_a_deck_derives_the_completion_view() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = Session::default();
    session.apply(
        Action::StartSession(Topic::Sentences, Difficulty::Advanced),
        &mut rng,
    );
    let total = session.deck().len();
    assert_eq!(total, MAX_DECK_SIZE.min(lookup(DEFAULT_KEY).len()));
    assert!(sources(session.deck()).is_subset(&sources(lookup(DEFAULT_KEY))));
    for _ in 0..total {
        session.apply(Action::Advance, &mut rng);
    }
    assert_eq!(session.cursor(), total);
    assert_eq!(session.mode(), Mode::Flashcards);
    assert_eq!(session.view(), View::Complete { studied: total });
}

#[test]
fn return_home_twice_is_the_same_as_once() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = Session::default();
    session.apply(
        Action::StartSession(Topic::Adjectives, Difficulty::Beginner),
        &mut rng,
    );
    session.apply(Action::MarkNeedsHelp, &mut rng);
    session.apply(Action::ReturnHome, &mut rng);
    let deck = session.deck().to_vec();
    session.apply(Action::ReturnHome, &mut rng);
    assert_eq!(session.mode(), Mode::Select);
    assert_eq!(session.deck(), deck.as_slice());
    assert_eq!(session.review_list().len(), 1);
    session.apply(Action::ClearReview, &mut rng);
    session.apply(Action::ClearReview, &mut rng);
    assert!(session.review_list().is_empty());
}
