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

use std::fs::read_to_string;
use std::path::PathBuf;

use walkdir::WalkDir;

use quizdeck_core::ErrorReport;
use quizdeck_core::Fallible;
use quizdeck_core::Term;
use quizdeck_core::fail;
use quizdeck_core::parse_topics;

/// A collection is a directory of topic files. It is parsed fresh on every
/// invocation and never written back.
pub struct Collection {
    /// Absolute path to the collection root directory.
    pub directory: PathBuf,
    /// All terms from all topic files, in file order.
    pub terms: Vec<Term>,
}

impl Collection {
    /// Load the collection at the given directory, or the current working
    /// directory if none is given.
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(directory) => PathBuf::from(directory),
            None => std::env::current_dir()?,
        };
        if !directory.exists() {
            return fail("directory does not exist.");
        }
        let directory = directory.canonicalize()?;

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&directory) {
            let entry =
                entry.map_err(|e| ErrorReport::new(format!("failed to read directory: {e}")))?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("md") {
                files.push(path.to_path_buf());
            }
        }
        // Topic files are visited in path order so term order is
        // reproducible.
        files.sort();

        let mut contents: Vec<(String, String)> = Vec::new();
        for path in &files {
            let name = path
                .strip_prefix(&directory)
                .unwrap_or(path)
                .display()
                .to_string();
            contents.push((name, read_to_string(path)?));
        }
        let terms = parse_topics(
            contents
                .iter()
                .map(|(name, text)| (name.as_str(), text.as_str())),
        )?;

        Ok(Collection { directory, terms })
    }
}

/// Group terms by topic, preserving first-seen topic order.
pub fn topics(terms: &[Term]) -> Vec<(&str, Vec<&Term>)> {
    let mut grouped: Vec<(&str, Vec<&Term>)> = Vec::new();
    for term in terms {
        match grouped.iter_mut().find(|(topic, _)| *topic == term.topic()) {
            Some((_, terms)) => terms.push(term),
            None => grouped.push((term.topic(), vec![term])),
        }
    }
    grouped
}
