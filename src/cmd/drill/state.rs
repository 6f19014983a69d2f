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

use chrono::NaiveDateTime;
use tokio::sync::oneshot::Sender;

use quizdeck_core::CardSession;
use quizdeck_core::QuizSession;
use quizdeck_core::rng::TinyRng;

/// The study session behind the web interface.
pub enum Session {
    Quiz(QuizSession),
    Cards(CardSession),
}

#[derive(Clone)]
pub struct ServerState {
    /// Absolute path to the collection root directory. Media files are
    /// served from here.
    pub directory: PathBuf,
    pub session_started_at: NaiveDateTime,
    pub mutable: Arc<Mutex<MutableState>>,
    pub shutdown_tx: Arc<Mutex<Option<Sender<()>>>>,
}

pub struct MutableState {
    /// Random source for quiz generation, seeded once at server start.
    pub rng: TinyRng,
    pub session: Session,
    /// The option picked for the current question, shown as feedback until
    /// the user moves on.
    pub selected: Option<String>,
    pub finished_at: Option<NaiveDateTime>,
}
