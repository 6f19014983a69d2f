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

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::aliases::TopicName;

/// Identifies a term. The identifier is a content hash of the term's topic,
/// source line, label, and definition, so it is stable across reloads of an
/// unchanged topic file, and distinct even for identical lines repeated in
/// the same file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TermId {
    #[serde(skip)]
    inner: blake3::Hash,
}

impl TermId {
    pub fn of(topic: &str, line_num: usize, term: &str, definition: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(topic.as_bytes());
        hasher.update(&[0]);
        hasher.update(line_num.to_le_bytes().as_slice());
        hasher.update(&[0]);
        hasher.update(term.as_bytes());
        hasher.update(&[0]);
        hasher.update(definition.as_bytes());
        Self {
            inner: hasher.finalize(),
        }
    }

    pub fn to_hex(self) -> String {
        self.inner.to_hex().to_string()
    }

    pub fn from_hex(s: &str) -> Fallible<Self> {
        let inner =
            blake3::Hash::from_hex(s).map_err(|_| ErrorReport::new("invalid term identifier"))?;
        Ok(Self { inner })
    }
}

impl Display for TermId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for TermId {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TermId::from_hex(&value)
    }
}

impl From<TermId> for String {
    fn from(id: TermId) -> String {
        id.to_hex()
    }
}

/// A learnable unit: a text label and its definition or translation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Term {
    id: TermId,
    topic: TopicName,
    term: String,
    definition: String,
    /// Collection-relative path of an attached image, if the definition
    /// references one. Not used by quiz generation.
    image: Option<String>,
}

impl Term {
    /// Construct a term. The label and definition must be non-empty after
    /// trimming.
    pub fn new(
        topic: impl Into<String>,
        line_num: usize,
        term: impl Into<String>,
        definition: impl Into<String>,
        image: Option<String>,
    ) -> Fallible<Self> {
        let topic: String = topic.into();
        let term: String = term.into();
        let definition: String = definition.into();
        if term.trim().is_empty() {
            return fail("term text must not be empty");
        }
        if definition.trim().is_empty() {
            return fail("term definition must not be empty");
        }
        let id = TermId::of(&topic, line_num, &term, &definition);
        Ok(Self {
            id,
            topic,
            term,
            definition,
            image,
        })
    }

    pub fn id(&self) -> TermId {
        self.id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}
