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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::rng::RandomSource;
use crate::rng::shuffle;
use crate::types::question::Question;
use crate::types::term::Term;

/// Number of options in a multiple-choice question.
pub const OPTION_COUNT: usize = 4;

/// Number of wrong options accompanying the correct one.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Minimum number of terms needed to generate a quiz: one correct answer
/// plus [`DISTRACTOR_COUNT`] other terms to draw wrong options from.
pub const MIN_QUIZ_TERMS: usize = 4;

/// Why a quiz could not be generated.
#[derive(Debug, PartialEq)]
pub enum QuizError {
    /// Fewer terms than [`MIN_QUIZ_TERMS`] were supplied.
    InsufficientTerms { available: usize },
}

impl Display for QuizError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::InsufficientTerms { available } => write!(
                f,
                "not enough terms for a quiz: have {available}, need at least {MIN_QUIZ_TERMS}."
            ),
        }
    }
}

impl Error for QuizError {}

/// Generate a multiple-choice quiz from a list of terms.
///
/// The quiz has one question per input term, in randomized order. Each
/// question takes its prompt from the term's definition and offers the
/// term's label among [`OPTION_COUNT`] shuffled options; the wrong options
/// are a fresh random sample from the other terms, compared by label text.
///
/// The input is not mutated. The result depends on the random source, so
/// repeated calls produce differently ordered quizzes.
///
/// Terms with duplicate label text degrade the options: every same-text
/// term is excluded from the question's distractor pool, so fewer than
/// [`DISTRACTOR_COUNT`] wrong options may exist, while other questions can
/// draw the duplicated label more than once. `quizdeck check` reports
/// duplicates for this reason.
pub fn generate_quiz(
    terms: &[Term],
    rng: &mut dyn RandomSource,
) -> Result<Vec<Question>, QuizError> {
    if terms.len() < MIN_QUIZ_TERMS {
        return Err(QuizError::InsufficientTerms {
            available: terms.len(),
        });
    }
    let order: Vec<Term> = shuffle(terms.to_vec(), rng);
    let mut questions: Vec<Question> = Vec::with_capacity(order.len());
    for current in &order {
        let others: Vec<String> = order
            .iter()
            .filter(|t| t.term() != current.term())
            .map(|t| t.term().to_string())
            .collect();
        let wrong: Vec<String> = shuffle(others, rng)
            .into_iter()
            .take(DISTRACTOR_COUNT)
            .collect();
        let mut options: Vec<String> = Vec::with_capacity(OPTION_COUNT);
        options.push(current.term().to_string());
        options.extend(wrong);
        let options = shuffle(options, rng);
        questions.push(Question {
            definition: current.definition().to_string(),
            correct: current.term().to_string(),
            options,
        });
    }
    Ok(questions)
}
