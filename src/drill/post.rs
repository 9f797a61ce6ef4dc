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

use std::sync::PoisonError;

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::response::Redirect;
use serde::Deserialize;

use crate::drill::state::ServerState;
use crate::session::Action;
use crate::types::difficulty::Difficulty;
use crate::types::theme::Theme;
use crate::types::topic::Topic;

/// The `action` field of a submitted form.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
enum FormAction {
    Theme,
    Difficulty,
    Start,
    Reveal,
    Know,
    Help,
    Home,
    Review,
    Clear,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Default)]
pub struct FormData {
    #[serde(default)]
    action: FormAction,
    topic: Option<String>,
    difficulty: Option<String>,
    theme: Option<String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    form: Result<Form<FormData>, FormRejection>,
) -> Redirect {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            log::debug!("Ignoring malformed form: {rejection}");
            return Redirect::to("/");
        }
    };
    match parse_action(&form) {
        Some(action) => {
            let mut session = state
                .mutable
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            session.apply(action, &mut rand::rng());
        }
        None => {
            log::debug!("Ignoring form with action {:?}.", form.action);
        }
    }
    Redirect::to("/")
}

/// Maps a form onto a session action. Forms with a missing or unrecognized
/// value map to nothing.
fn parse_action(form: &FormData) -> Option<Action> {
    let action = match form.action {
        FormAction::Theme => {
            Action::SelectTheme(Theme::try_from(form.theme.as_deref()?).ok()?)
        }
        FormAction::Difficulty => {
            Action::SetDifficulty(Difficulty::try_from(form.difficulty.as_deref()?).ok()?)
        }
        FormAction::Start => {
            let topic = Topic::try_from(form.topic.as_deref()?).ok()?;
            let difficulty = Difficulty::try_from(form.difficulty.as_deref()?).ok()?;
            Action::StartSession(topic, difficulty)
        }
        FormAction::Reveal => Action::RevealAnswer,
        FormAction::Know => Action::Advance,
        FormAction::Help => Action::MarkNeedsHelp,
        FormAction::Home => Action::ReturnHome,
        FormAction::Review => Action::OpenReview,
        FormAction::Clear => Action::ClearReview,
        FormAction::Unknown => return None,
    };
    Some(action)
}
