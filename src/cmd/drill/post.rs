// Copyright 2026 the quizdeck authors
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

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use chrono::Local;
use serde::Deserialize;

use crate::cmd::drill::get::farewell_page;
use crate::cmd::drill::get::render_session;
use crate::cmd::drill::state::MutableState;
use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::state::Session;
use crate::cmd::drill::template::page_template;

#[derive(Deserialize)]
pub struct ActionForm {
    action: String,
    #[serde(default)]
    option: Option<String>,
}

/// Apply a form action to the session and render the resulting state.
/// Out-of-order actions (answering twice, advancing before answering,
/// flipping in quiz mode) are ignored.
pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<ActionForm>,
) -> Html<String> {
    let mut mutable = state.mutable.lock().unwrap();
    let MutableState {
        rng,
        session,
        selected,
        finished_at,
    } = &mut *mutable;
    match form.action.as_str() {
        "Select" => {
            if let Session::Quiz(session) = session {
                if let Some(option) = form.option {
                    if session.answer(&option).is_some() {
                        *selected = Some(option);
                    }
                }
            }
        }
        "Next" => match session {
            Session::Quiz(session) => {
                session.advance();
                *selected = None;
                if session.is_finished() && finished_at.is_none() {
                    *finished_at = Some(Local::now().naive_local());
                }
            }
            Session::Cards(session) => {
                session.next();
            }
        },
        "Restart" => {
            if let Session::Quiz(session) = session {
                // Regeneration cannot fail here: the terms already produced
                // a quiz once.
                if session.restart(rng).is_ok() {
                    *selected = None;
                    *finished_at = None;
                }
            }
        }
        "Flip" => {
            if let Session::Cards(session) = session {
                session.flip();
            }
        }
        "End" => {
            if finished_at.is_none() {
                *finished_at = Some(Local::now().naive_local());
            }
            if let Some(tx) = state.shutdown_tx.lock().unwrap().take() {
                let _ = tx.send(());
            }
            return Html(page_template(farewell_page()).into_string());
        }
        other => {
            log::debug!("Ignoring unknown action: {other}");
        }
    }
    Html(page_template(render_session(&state, &mutable)).into_string())
}
