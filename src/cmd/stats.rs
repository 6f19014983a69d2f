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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Serialize;

use quizdeck_core::Fallible;
use quizdeck_core::MIN_QUIZ_TERMS;
use quizdeck_core::Term;

use crate::collection::Collection;
use crate::collection::topics;

#[derive(ValueEnum, Clone, Copy, PartialEq)]
pub enum StatsFormat {
    Text,
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct TopicStats {
    topic: String,
    terms: usize,
    /// Whether the topic has enough terms for a quiz.
    quiz: bool,
}

pub fn print_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let Collection { terms, .. } = Collection::new(directory)?;
    let stats = collect_stats(&terms);
    match format {
        StatsFormat::Text => {
            println!("{:<32} {:>6} {:>6}", "topic", "terms", "quiz");
            for entry in &stats {
                println!(
                    "{:<32} {:>6} {:>6}",
                    entry.topic,
                    entry.terms,
                    if entry.quiz { "yes" } else { "no" }
                );
            }
            println!("{:<32} {:>6}", "total", terms.len());
        }
        StatsFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}

fn collect_stats(terms: &[Term]) -> Vec<TopicStats> {
    topics(terms)
        .into_iter()
        .map(|(topic, terms)| TopicStats {
            topic: topic.to_string(),
            terms: terms.len(),
            quiz: terms.len() >= MIN_QUIZ_TERMS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_terms(topic: &str, n: usize) -> Vec<Term> {
        (0..n)
            .map(|i| Term::new(topic, i + 1, format!("term-{i}"), "a definition", None).unwrap())
            .collect()
    }

    #[test]
    fn test_collect_stats() {
        let mut terms = make_terms("Animals", 5);
        terms.extend(make_terms("Colors", 2));
        let stats = collect_stats(&terms);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].topic, "Animals");
        assert_eq!(stats[0].terms, 5);
        assert!(stats[0].quiz);
        assert_eq!(stats[1].topic, "Colors");
        assert!(!stats[1].quiz);
    }

    #[test]
    fn test_stats_serialize() -> Fallible<()> {
        let stats = collect_stats(&make_terms("Animals", 4));
        let json = serde_json::to_string(&stats)?;
        assert!(json.contains("\"topic\":\"Animals\""));
        assert!(json.contains("\"terms\":4"));
        assert!(json.contains("\"quiz\":true"));
        Ok(())
    }
}
