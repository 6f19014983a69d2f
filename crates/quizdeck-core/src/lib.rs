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

//! quizdeck-core: Core library for the quizdeck flashcard and quiz tool.
//!
//! This library provides the pure parts of quizdeck:
//! - Parsing topic files into terms
//! - Multiple-choice quiz generation
//! - Quiz and flip-card session state machines
//! - Markdown to HTML rendering

pub mod error;
pub mod markdown;
pub mod parser;
pub mod quiz;
pub mod rng;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use error::{ErrorReport, Fallible, fail};
pub use parser::{parse_topic_content, parse_topics};
pub use quiz::{DISTRACTOR_COUNT, MIN_QUIZ_TERMS, OPTION_COUNT, QuizError, generate_quiz};
pub use session::{CardSession, QuizSession};
pub use types::question::Question;
pub use types::term::{Term, TermId};
