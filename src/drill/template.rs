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

use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::types::theme::Theme;

pub const TITLE: &str = "French Flashcards";

pub fn page_template(theme: Theme, review_count: usize, body: Markup) -> Markup {
    let palette = theme.palette().to_css();
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE) }
                link rel="stylesheet" href="/style.css";
                style { (PreEscaped(palette)) }
            }
            body {
                (header(theme, review_count))
                main {
                    (body)
                }
            }
        }
    }
}

fn header(theme: Theme, review_count: usize) -> Markup {
    html! {
        header {
            h1 { (TITLE) }
            div.nav {
                form action="/" method="post" {
                    button id="home" type="submit" name="action" value="Home" { "Home" }
                    button id="review" type="submit" name="action" value="Review" {
                        "Help (" (review_count) ")"
                    }
                }
                form.theme action="/" method="post" {
                    input type="hidden" name="action" value="Theme";
                    select name="theme" onchange="this.form.submit()" {
                        @for choice in Theme::ALL {
                            @if choice == theme {
                                option value=(choice.as_str()) selected { (choice.label()) }
                            } @else {
                                option value=(choice.as_str()) { (choice.label()) }
                            }
                        }
                    }
                    noscript {
                        button type="submit" { "Apply" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_template() {
        let html = page_template(Theme::Dark, 4, html! { p { "body" } }).into_string();
        assert!(html.contains("<title>French Flashcards</title>"));
        assert!(html.contains("--accent: #bb86fc"));
        assert!(html.contains("Help (4)"));
        assert!(html.contains("<option value=\"dark\" selected>Dark</option>"));
        assert!(html.contains("<option value=\"redBlack\">Red &amp; Black</option>"));
        assert!(html.contains("<p>body</p>"));
    }
}
