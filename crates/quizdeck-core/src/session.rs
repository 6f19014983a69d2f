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

use crate::quiz::QuizError;
use crate::quiz::generate_quiz;
use crate::rng::RandomSource;
use crate::types::question::Question;
use crate::types::term::Term;

/// A quiz in progress: the generated questions plus a cursor and a score.
///
/// The session keeps the source terms so that [`QuizSession::restart`] can
/// generate a fresh quiz with new randomization.
pub struct QuizSession {
    terms: Vec<Term>,
    questions: Vec<Question>,
    cursor: usize,
    score: usize,
    answered: bool,
}

impl QuizSession {
    /// Generate a quiz from the given terms and start at the first question.
    pub fn start(terms: Vec<Term>, rng: &mut dyn RandomSource) -> Result<Self, QuizError> {
        let questions = generate_quiz(&terms, rng)?;
        Ok(Self {
            terms,
            questions,
            cursor: 0,
            score: 0,
            answered: false,
        })
    }

    /// The question under the cursor, or `None` once the session is
    /// finished.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// Record an answer for the current question and return whether it was
    /// correct. Only the first answer to a question counts; repeated
    /// answers (and answers after the end) return `None` and leave the
    /// score unchanged.
    pub fn answer(&mut self, option: &str) -> Option<bool> {
        if self.answered {
            return None;
        }
        let correct = option == self.current()?.correct;
        self.answered = true;
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    /// Move to the next question. Ignored until the current question has
    /// been answered.
    pub fn advance(&mut self) {
        if self.answered && self.cursor < self.questions.len() {
            self.cursor += 1;
            self.answered = false;
        }
    }

    /// Throw away the current quiz and generate a fresh one from the same
    /// terms, with new randomization. Resets the cursor and the score.
    pub fn restart(&mut self, rng: &mut dyn RandomSource) -> Result<(), QuizError> {
        self.questions = generate_quiz(&self.terms, rng)?;
        self.cursor = 0;
        self.score = 0;
        self.answered = false;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    /// Whether the current question has already been answered.
    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Flip-card review over terms in their file order. Advancing wraps around
/// at the end, so the session has no natural end; the user ends it.
pub struct CardSession {
    terms: Vec<Term>,
    index: usize,
    flipped: bool,
}

impl CardSession {
    pub fn new(terms: Vec<Term>) -> Self {
        Self {
            terms,
            index: 0,
            flipped: false,
        }
    }

    /// The card under the cursor, or `None` if there are no cards.
    pub fn current(&self) -> Option<&Term> {
        self.terms.get(self.index)
    }

    /// Turn the current card over (or back).
    pub fn flip(&mut self) {
        if !self.terms.is_empty() {
            self.flipped = !self.flipped;
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Advance to the next card, front side up. Wraps around at the end.
    pub fn next(&mut self) {
        if self.terms.is_empty() {
            return;
        }
        self.flipped = false;
        self.index = (self.index + 1) % self.terms.len();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
