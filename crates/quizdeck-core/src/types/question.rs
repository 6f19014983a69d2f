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

/// A multiple-choice question derived from a term. Questions are generated
/// fresh for every quiz session and never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    /// The prompt shown to the user.
    pub definition: String,
    /// The expected answer text.
    pub correct: String,
    /// Answer options in display order: the correct answer plus the
    /// distractors, shuffled.
    pub options: Vec<String>,
}
