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

use std::fs::write;

use serde::Serialize;

use quizdeck_core::Fallible;
use quizdeck_core::Term;

use crate::collection::Collection;
use crate::collection::topics;

#[derive(Serialize)]
struct TopicExport<'a> {
    topic: &'a str,
    terms: Vec<&'a Term>,
}

/// Export a collection as JSON, grouped by topic.
pub fn export_collection(directory: Option<String>, output: Option<String>) -> Fallible<()> {
    let Collection { terms, .. } = Collection::new(directory)?;
    let export: Vec<TopicExport> = topics(&terms)
        .into_iter()
        .map(|(topic, terms)| TopicExport { topic, terms })
        .collect();
    let json = serde_json::to_string_pretty(&export)?;
    match output {
        Some(path) => write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
