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

//! The study session state machine.
//!
//! Every transition is total: an action that does not apply to the current
//! state leaves it untouched.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::difficulty::Difficulty;
use crate::types::theme::Theme;
use crate::types::topic::Topic;
use crate::types::word_pair::WordPair;
use crate::vocab::VocabularyKey;
use crate::vocab::lookup;

/// The maximum number of cards in a deck.
pub const MAX_DECK_SIZE: usize = 20;

/// Which screen the session is on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Select,
    Flashcards,
    Help,
}

/// A user action. Each variant corresponds to one control on the page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    SelectTheme(Theme),
    SetDifficulty(Difficulty),
    StartSession(Topic, Difficulty),
    RevealAnswer,
    Advance,
    MarkNeedsHelp,
    ReturnHome,
    OpenReview,
    ClearReview,
}

/// What the page should show, derived from the session.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum View<'a> {
    Select {
        difficulty: Difficulty,
    },
    Card {
        pair: WordPair,
        /// One-based.
        position: usize,
        total: usize,
        revealed: bool,
    },
    Complete {
        studied: usize,
    },
    Review {
        words: &'a [WordPair],
    },
}

#[derive(Clone, Debug)]
pub struct Session {
    mode: Mode,
    topic: Option<Topic>,
    difficulty: Difficulty,
    deck: Vec<WordPair>,
    cursor: usize,
    answer_revealed: bool,
    review_list: Vec<WordPair>,
    theme: Theme,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Theme::default(), Difficulty::default())
    }
}

impl Session {
    pub fn new(theme: Theme, difficulty: Difficulty) -> Self {
        Self {
            mode: Mode::Select,
            topic: None,
            difficulty,
            deck: Vec::new(),
            cursor: 0,
            answer_revealed: false,
            review_list: Vec::new(),
            theme,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn topic(&self) -> Option<Topic> {
        self.topic
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn deck(&self) -> &[WordPair] {
        &self.deck
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    pub fn review_list(&self) -> &[WordPair] {
        &self.review_list
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The card on screen, if any.
    pub fn current_card(&self) -> Option<WordPair> {
        if self.mode == Mode::Flashcards {
            self.deck.get(self.cursor).copied()
        } else {
            None
        }
    }

    /// Whether every card in the deck has been visited.
    pub fn is_complete(&self) -> bool {
        self.cursor == self.deck.len()
    }

    pub fn apply<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) {
        log::debug!("Applying {action:?} in {:?} mode.", self.mode);
        match action {
            Action::SelectTheme(theme) => self.select_theme(theme),
            Action::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
            Action::StartSession(topic, difficulty) => {
                self.start_session(topic, difficulty, rng)
            }
            Action::RevealAnswer => self.reveal_answer(),
            Action::Advance => self.advance(),
            Action::MarkNeedsHelp => self.mark_needs_help(),
            Action::ReturnHome => self.return_home(),
            Action::OpenReview => self.open_review(),
            Action::ClearReview => self.clear_review(),
        }
    }

    pub fn select_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Sets the difficulty the next deck is drawn at. An in-progress deck is
    /// unaffected.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Deals a fresh deck: a shuffled copy of the vocabulary list for the
    /// key, truncated to [`MAX_DECK_SIZE`].
    pub fn start_session<R: Rng + ?Sized>(
        &mut self,
        topic: Topic,
        difficulty: Difficulty,
        rng: &mut R,
    ) {
        let deck = deal(lookup(VocabularyKey::new(topic, difficulty)), rng);
        log::debug!("Dealt {} cards for {topic}/{difficulty}.", deck.len());
        self.topic = Some(topic);
        self.difficulty = difficulty;
        self.deck = deck;
        self.cursor = 0;
        self.answer_revealed = false;
        self.mode = Mode::Flashcards;
    }

    pub fn reveal_answer(&mut self) {
        if self.current_card().is_some() {
            self.answer_revealed = true;
        } else {
            log::debug!("No card to reveal.");
        }
    }

    /// Moves past the current card ("I Know This").
    pub fn advance(&mut self) {
        if self.current_card().is_some() {
            self.cursor += 1;
            self.answer_revealed = false;
        } else {
            log::debug!("No card to advance past.");
        }
    }

    /// Adds the current card to the review list, then advances.
    pub fn mark_needs_help(&mut self) {
        match self.current_card() {
            Some(card) => {
                self.review_list.push(card);
                self.advance();
            }
            None => {
                log::debug!("No card to mark.");
            }
        }
    }

    pub fn return_home(&mut self) {
        self.mode = Mode::Select;
    }

    pub fn open_review(&mut self) {
        self.mode = Mode::Help;
    }

    pub fn clear_review(&mut self) {
        self.review_list.clear();
    }

    pub fn view(&self) -> View<'_> {
        match self.mode {
            Mode::Select => View::Select {
                difficulty: self.difficulty,
            },
            Mode::Flashcards if self.is_complete() => View::Complete {
                studied: self.deck.len(),
            },
            Mode::Flashcards => View::Card {
                pair: self.deck[self.cursor],
                position: self.cursor + 1,
                total: self.deck.len(),
                revealed: self.answer_revealed,
            },
            Mode::Help => View::Review {
                words: &self.review_list,
            },
        }
    }
}

/// A shuffled copy of `list`, at most [`MAX_DECK_SIZE`] cards long.
fn deal<R: Rng + ?Sized>(list: &[WordPair], rng: &mut R) -> Vec<WordPair> {
    let mut deck = list.to_vec();
    deck.shuffle(rng);
    deck.truncate(MAX_DECK_SIZE);
    deck
}
