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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

use crate::drill::state::ServerState;
use crate::drill::template::page_template;
use crate::drill::view::render_view;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let session = state
        .mutable
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let body = render_view(session.view());
    let html = page_template(session.theme(), session.review_list().len(), body);
    (StatusCode::OK, Html(html.into_string()))
}
