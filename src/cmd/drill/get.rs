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

use axum::extract::State;
use axum::response::Html;
use chrono::Local;
use chrono::NaiveDateTime;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use quizdeck_core::CardSession;
use quizdeck_core::Question;
use quizdeck_core::QuizSession;
use quizdeck_core::markdown::markdown_to_html_inline;

use crate::cmd::drill::state::MutableState;
use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::state::Session;
use crate::cmd::drill::template::page_template;
use crate::media::media_url;

pub async fn get_handler(State(state): State<ServerState>) -> Html<String> {
    let mutable = state.mutable.lock().unwrap();
    Html(page_template(render_session(&state, &mutable)).into_string())
}

/// Render the page for the session's current state.
pub fn render_session(state: &ServerState, mutable: &MutableState) -> Markup {
    match &mutable.session {
        Session::Quiz(session) => {
            if session.is_finished() {
                results_page(session, state.session_started_at)
            } else {
                quiz_page(session, mutable.selected.as_deref())
            }
        }
        Session::Cards(session) => cards_page(session),
    }
}

/// Render a definition, with image references routed through the media
/// endpoint.
fn definition_html(definition: &str) -> Markup {
    PreEscaped(markdown_to_html_inline(definition, Some(&media_url)))
}

fn option_key(idx: usize) -> char {
    (b'A' + idx as u8) as char
}

fn option_class(question: &Question, selected: Option<&str>, option: &str) -> &'static str {
    match selected {
        None => "option",
        Some(selected) => {
            if option == question.correct {
                "option correct"
            } else if option == selected {
                "option wrong"
            } else {
                "option"
            }
        }
    }
}

fn quiz_page(session: &QuizSession, selected: Option<&str>) -> Markup {
    let Some(question) = session.current() else {
        // Unreachable: the caller checks is_finished() first.
        return html! {};
    };
    html! {
        main .drill {
            p .progress { "Question " (session.cursor() + 1) " of " (session.len()) }
            section .prompt { (definition_html(&question.definition)) }
            form .options method="post" action="/" {
                input type="hidden" name="action" value="Select";
                @for (idx, option) in question.options.iter().enumerate() {
                    button
                        class=(option_class(question, selected, option))
                        name="option"
                        value=(option)
                        disabled[selected.is_some()] {
                        span .key { (option_key(idx)) ") " }
                        (option)
                    }
                }
            }
            @if selected.is_some() {
                form .controls method="post" action="/" {
                    button #next name="action" value="Next" { "Next" }
                }
            }
            p .score { "Score: " (session.score()) }
        }
    }
}

fn results_page(session: &QuizSession, started_at: NaiveDateTime) -> Markup {
    let elapsed = Local::now().naive_local() - started_at;
    let minutes = elapsed.num_minutes();
    let seconds = elapsed.num_seconds() % 60;
    html! {
        main .drill .results {
            h1 { "Quiz Complete!" }
            p .final-score { "Your score: " (session.score()) " / " (session.len()) }
            p .duration { "Session duration: " (minutes) "m " (seconds) "s" }
            form .controls method="post" action="/" {
                button name="action" value="Restart" { "Try Again" }
                button name="action" value="End" { "End Session" }
            }
        }
    }
}

fn cards_page(session: &CardSession) -> Markup {
    html! {
        main .drill {
            @if let Some(term) = session.current() {
                section .card {
                    @if session.is_flipped() {
                        .card-back { (definition_html(term.definition())) }
                    } @else {
                        .card-front { (term.term()) }
                    }
                }
                p .progress { "Card " (session.index() + 1) " of " (session.len()) }
                form .controls method="post" action="/" {
                    button #flip name="action" value="Flip" {
                        @if session.is_flipped() { "Show Term" } @else { "Flip" }
                    }
                    button #next name="action" value="Next" { "Next" }
                    button name="action" value="End" { "End Session" }
                }
            } @else {
                p .empty { "No cards." }
            }
        }
    }
}

pub fn farewell_page() -> Markup {
    html! {
        main .drill .results {
            h1 { "Session Complete" }
            p { "You can close this tab." }
        }
    }
}
