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

use maud::Markup;
use maud::html;

use crate::session::View;
use crate::types::difficulty::Difficulty;
use crate::types::topic::Topic;
use crate::types::word_pair::WordPair;

pub fn render_view(view: View<'_>) -> Markup {
    match view {
        View::Select { difficulty } => render_select(difficulty),
        View::Card {
            pair,
            position,
            total,
            revealed,
        } => render_card(pair, position, total, revealed),
        View::Complete { studied } => render_completion(studied),
        View::Review { words } => render_review(words),
    }
}

fn render_select(selected: Difficulty) -> Markup {
    html! {
        div.select {
            h2 { "Select Your Study Session" }
            h3 { "Difficulty:" }
            form.difficulties action="/" method="post" {
                input type="hidden" name="action" value="Difficulty";
                @for difficulty in Difficulty::ALL {
                    @if difficulty == selected {
                        button.selected type="submit" name="difficulty" value=(difficulty.as_str()) {
                            (difficulty)
                        }
                    } @else {
                        button type="submit" name="difficulty" value=(difficulty.as_str()) {
                            (difficulty)
                        }
                    }
                }
            }
            h3 { "Topic:" }
            form.topics action="/" method="post" {
                input type="hidden" name="action" value="Start";
                input type="hidden" name="difficulty" value=(selected.as_str());
                @for topic in Topic::ALL {
                    button.topic type="submit" name="topic" value=(topic.as_str()) {
                        (topic)
                    }
                }
            }
        }
    }
}

fn render_card(pair: WordPair, position: usize, total: usize, revealed: bool) -> Markup {
    let progress = format!("Card {position} of {total}");
    html! {
        div.drill {
            div.card {
                h2.source { (pair.source()) }
                @if revealed {
                    p.target { (pair.target()) }
                }
            }
            div.controls {
                form action="/" method="post" {
                    @if revealed {
                        button #know type="submit" name="action" value="Know" { "I Know This" }
                        button #need-help type="submit" name="action" value="Help" { "Need Help" }
                    } @else {
                        button #reveal type="submit" name="action" value="Reveal" { "Show Answer" }
                    }
                }
            }
            p.progress { (progress) }
        }
    }
}

fn render_completion(studied: usize) -> Markup {
    html! {
        div.finished {
            h2 { "Session Complete!" }
            p { "You studied " (studied) " words" }
            form action="/" method="post" {
                button type="submit" name="action" value="Home" { "Back to Home" }
            }
        }
    }
}

fn render_review(words: &[WordPair]) -> Markup {
    html! {
        div.review {
            h2 { "Words Needing Help" }
            @if words.is_empty() {
                p { "You're all caught up!" }
            } @else {
                div.words {
                    @for word in words {
                        div.word {
                            span.source { (word.source()) }
                            span.target { (word.target()) }
                        }
                    }
                }
            }
            form action="/" method="post" {
                button #clear type="submit" name="action" value="Clear" { "Clear All" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_card() {
        let pair = WordPair::new("chat", "cat");
        let html = render_view(View::Card {
            pair,
            position: 3,
            total: 19,
            revealed: false,
        })
        .into_string();
        assert!(html.contains("chat"));
        assert!(!html.contains("cat<"));
        assert!(html.contains("Show Answer"));
        assert!(html.contains("Card 3 of 19"));
    }

    #[test]
    fn test_revealed_card() {
        let pair = WordPair::new("chat", "cat");
        let html = render_view(View::Card {
            pair,
            position: 1,
            total: 1,
            revealed: true,
        })
        .into_string();
        assert!(html.contains(">cat</p>"));
        assert!(html.contains("I Know This"));
        assert!(html.contains("Need Help"));
        assert!(!html.contains("Show Answer"));
    }

    #[test]
    fn test_completion() {
        let html = render_view(View::Complete { studied: 20 }).into_string();
        assert!(html.contains("Session Complete!"));
        assert!(html.contains("You studied 20 words"));
    }

    #[test]
    fn test_empty_review() {
        let html = render_view(View::Review { words: &[] }).into_string();
        assert!(html.contains("You&#39;re all caught up!") || html.contains("You're all caught up!"));
    }

    #[test]
    fn test_select_marks_difficulty() {
        let html = render_view(View::Select {
            difficulty: Difficulty::Intermediate,
        })
        .into_string();
        let marker = html.find("class=\"selected\"").unwrap();
        let start = html[..marker].rfind('<').unwrap();
        let end = marker + html[marker..].find('>').unwrap();
        assert!(html[start..end].contains("value=\"intermediate\""));
        assert_eq!(html.matches("class=\"selected\"").count(), 1);
        assert!(html.contains("value=\"living things\""));
        assert!(html.contains("<input type=\"hidden\" name=\"difficulty\" value=\"intermediate\">"));
    }
}
