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

use std::collections::HashSet;

use quizdeck_core::Fallible;
use quizdeck_core::MIN_QUIZ_TERMS;
use quizdeck_core::Term;
use quizdeck_core::fail;

use crate::collection::Collection;
use crate::collection::topics;

/// Check a collection for problems: topics below the quiz floor and
/// duplicate term labels within a topic.
pub fn check_collection(directory: Option<String>) -> Fallible<()> {
    let Collection { terms, .. } = Collection::new(directory)?;
    let problems = find_problems(&terms);
    if problems.is_empty() {
        println!("No problems found.");
        return Ok(());
    }
    for problem in &problems {
        println!("{problem}");
    }
    fail(format!(
        "collection check failed: {} problem(s) found.",
        problems.len()
    ))
}

fn find_problems(terms: &[Term]) -> Vec<String> {
    let mut problems: Vec<String> = Vec::new();
    for (topic, terms) in topics(terms) {
        if terms.len() < MIN_QUIZ_TERMS {
            problems.push(format!(
                "topic '{topic}' has {} term(s); a quiz needs at least {MIN_QUIZ_TERMS}.",
                terms.len()
            ));
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for term in terms {
            if !seen.insert(term.term()) {
                problems.push(format!(
                    "topic '{topic}' repeats the term '{}'; duplicate labels corrupt quiz options.",
                    term.term()
                ));
            }
        }
    }
    problems
}
