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

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use axum::Router;
use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use chrono::NaiveDateTime;
use tokio::net::TcpListener;
use tokio::select;
use tokio::signal;
use tokio::sync::oneshot::Receiver;
use tokio::sync::oneshot::channel;

use quizdeck_core::CardSession;
use quizdeck_core::Fallible;
use quizdeck_core::QuizSession;
use quizdeck_core::Term;
use quizdeck_core::fail;
use quizdeck_core::rng::TinyRng;

use crate::cmd::drill::get::get_handler;
use crate::cmd::drill::post::post_handler;
use crate::cmd::drill::state::MutableState;
use crate::cmd::drill::state::ServerState;
use crate::cmd::drill::state::Session;
use crate::collection::Collection;
use crate::media::MediaStore;
use crate::utils::CACHE_CONTROL_IMMUTABLE;

/// Which study mode to serve.
#[derive(Clone, Copy, PartialEq)]
pub enum DrillMode {
    /// Multiple-choice quiz.
    Quiz,
    /// Flip cards.
    Cards,
}

pub struct ServerConfig {
    pub mode: DrillMode,
    pub directory: Option<String>,
    pub topic_filter: Option<String>,
    pub host: String,
    pub port: u16,
    pub session_started_at: NaiveDateTime,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let Collection { directory, terms } = Collection::new(config.directory)?;

    let terms: Vec<Term> = match &config.topic_filter {
        Some(filter) => {
            let filtered: Vec<Term> = terms
                .into_iter()
                .filter(|t| t.topic() == filter.as_str())
                .collect();
            if filtered.is_empty() {
                return fail(format!("no topic named '{filter}'."));
            }
            filtered
        }
        None => terms,
    };

    // Seed the random source from the clock, so every run gets a freshly
    // randomized session.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64;
    let mut rng = TinyRng::from_seed(seed);

    let session = match config.mode {
        DrillMode::Quiz => match QuizSession::start(terms, &mut rng) {
            Ok(session) => Session::Quiz(session),
            Err(e) => {
                // Too little material is an empty state, not a failure.
                println!("{e}");
                return Ok(());
            }
        },
        DrillMode::Cards => {
            if terms.is_empty() {
                println!("No cards in the collection.");
                return Ok(());
            }
            Session::Cards(CardSession::new(terms))
        }
    };

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = channel();

    let state = ServerState {
        directory,
        session_started_at: config.session_started_at,
        mutable: Arc::new(Mutex::new(MutableState {
            rng,
            session,
            selected: None,
            finished_at: None,
        })),
        shutdown_tx: Arc::new(Mutex::new(Some(shutdown_tx))),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/script.js", get(script_handler));
    let app = app.route("/style.css", get(style_handler));
    let app = app.route("/file/{*path}", get(file_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state.clone());
    let bind = format!("{}:{}", config.host, config.port);

    // Start the server with graceful shutdown on Ctrl+C or the End button.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;

    // Check if the session was complete when the server shut down.
    let mutable = state.mutable.lock().unwrap();
    if mutable.finished_at.is_some() {
        Ok(())
    } else {
        fail("Session interrupted before completion")
    }
}

async fn script_handler() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/javascript")],
        include_str!("script.js"),
    )
}

async fn style_handler() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, CACHE_CONTROL_IMMUTABLE),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}

async fn file_handler(
    State(state): State<ServerState>,
    Path(path): Path<String>,
) -> (StatusCode, [(HeaderName, &'static str); 1], Vec<u8>) {
    let store = MediaStore::new(state.directory.clone());
    let validated_path: PathBuf = match store.validate(&path) {
        Ok(p) => p,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                [(CONTENT_TYPE, "text/plain")],
                b"Not Found".to_vec(),
            );
        }
    };
    let extension = validated_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    let content_type: &str = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    };
    let content = tokio::fs::read(validated_path).await;
    match content {
        Ok(bytes) => (StatusCode::OK, [(CONTENT_TYPE, content_type)], bytes),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, "text/plain")],
            b"Internal Server Error".to_vec(),
        ),
    }
}

async fn shutdown_signal(shutdown_rx: Receiver<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let shutdown = async {
        shutdown_rx.await.ok();
    };

    select! {
        _ = ctrl_c => {
            log::debug!("Received Ctrl+C, shutting down gracefully");
        },
        _ = shutdown => {
            log::debug!("Received shutdown signal, shutting down gracefully");
        },
    }
}
