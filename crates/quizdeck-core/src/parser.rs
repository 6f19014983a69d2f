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

use serde::Deserialize;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::markdown::first_image_url;
use crate::types::aliases::TopicName;
use crate::types::term::Term;

/// Metadata that can be specified at the top of a topic file.
#[derive(Debug, Deserialize)]
struct TopicMetadata {
    name: Option<String>,
}

/// Extract TOML frontmatter from a topic file.
/// Returns (topic_name_override, content_without_frontmatter).
pub fn extract_frontmatter(text: &str) -> Fallible<(Option<String>, &str)> {
    let mut lines = text.lines().enumerate().peekable();

    // Check if the file starts with a frontmatter delimiter.
    match lines.peek() {
        Some((_, line)) if line.trim() == "---" => {}
        _ => return Ok((None, text)),
    };
    lines.next(); // consume the opening delimiter

    // Collect frontmatter lines and find the closing delimiter.
    let mut frontmatter_lines = Vec::new();
    let mut closing_line_idx = None;

    for (idx, line) in lines {
        if line.trim() == "---" {
            closing_line_idx = Some(idx);
            break;
        }
        frontmatter_lines.push(line);
    }

    let closing_line_idx = closing_line_idx
        .ok_or_else(|| ErrorReport::new("Frontmatter opening '---' found but no closing '---'"))?;

    let frontmatter_str = frontmatter_lines.join("\n");
    let metadata: TopicMetadata = toml::from_str(&frontmatter_str)
        .map_err(|e| ErrorReport::new(format!("Failed to parse TOML frontmatter: {}", e)))?;

    // Find the byte offset where content starts (line after the closing
    // delimiter).
    let content_start_line = closing_line_idx + 1;
    let mut current_line = 0;
    let mut byte_pos = None;

    for (pos, ch) in text.char_indices() {
        if ch == '\n' {
            current_line += 1;
            if current_line == content_start_line {
                byte_pos = Some(pos + 1);
                break;
            }
        }
    }

    let content = match byte_pos {
        Some(pos) if pos < text.len() => &text[pos..],
        _ => "",
    };

    Ok((metadata.name, content))
}

#[derive(Debug)]
pub struct ParserError {
    pub message: String,
    pub source_path: String,
    pub line_num: usize,
}

impl ParserError {
    fn new(message: impl Into<String>, source_path: &str, line_num: usize) -> Self {
        ParserError {
            message: message.into(),
            source_path: source_path.to_string(),
            line_num,
        }
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.source_path, self.line_num, self.message
        )
    }
}

impl Error for ParserError {}

/// Parse a single topic file's content into terms.
///
/// Each non-blank line is a `term: definition` pair, split at the first
/// colon. Lines starting with `#` are skipped. Line numbers in errors are
/// relative to the content after the frontmatter.
///
/// # Arguments
/// * `topic_name` - The name of the topic
/// * `source_path` - A reference path for error messages
/// * `text` - The content to parse, without frontmatter
pub fn parse_topic_content(
    topic_name: &str,
    source_path: &str,
    text: &str,
) -> Result<Vec<Term>, ParserError> {
    let mut terms: Vec<Term> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (term, definition) = line.split_once(':').ok_or_else(|| {
            ParserError::new("expected a 'term: definition' line", source_path, line_num)
        })?;
        let term = term.trim();
        let definition = definition.trim();
        if term.is_empty() {
            return Err(ParserError::new("term text is empty", source_path, line_num));
        }
        if definition.is_empty() {
            return Err(ParserError::new(
                "term definition is empty",
                source_path,
                line_num,
            ));
        }
        let image = first_image_url(definition);
        let term = Term::new(topic_name, line_num, term, definition, image)
            .map_err(|e| ParserError::new(e.to_string(), source_path, line_num))?;
        terms.push(term);
    }
    Ok(terms)
}

/// Parse multiple topic files into a combined list of terms.
///
/// Terms keep their file order, and duplicate labels are kept as written;
/// the quiz generator documents how duplicate text affects options.
///
/// # Arguments
/// * `files` - Iterator of (filename, content) pairs
pub fn parse_topics<'a>(files: impl Iterator<Item = (&'a str, &'a str)>) -> Fallible<Vec<Term>> {
    let mut all_terms = Vec::new();

    for (filename, text) in files {
        let (custom_name, content) = extract_frontmatter(text)?;

        let topic_name: TopicName = custom_name.unwrap_or_else(|| {
            // Use the filename without extension as the topic name.
            filename.strip_suffix(".md").unwrap_or(filename).to_string()
        });

        let terms = parse_topic_content(&topic_name, filename, content)?;
        all_terms.extend(terms);
    }

    Ok(all_terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_topic() -> Fallible<()> {
        let text = "dog: a four-legged friend\ncat: an aloof companion\n";
        let terms = parse_topic_content("Animals", "animals.md", text)
            .map_err(ErrorReport::from)?;
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].topic(), "Animals");
        assert_eq!(terms[0].term(), "dog");
        assert_eq!(terms[0].definition(), "a four-legged friend");
        assert_eq!(terms[1].term(), "cat");
        Ok(())
    }

    #[test]
    fn test_blank_lines_and_comments_are_skipped() -> Fallible<()> {
        let text = "\n# Mammals\ndog: a dog\n\ncat: a cat\n";
        let terms = parse_topic_content("Animals", "animals.md", text)
            .map_err(ErrorReport::from)?;
        assert_eq!(terms.len(), 2);
        Ok(())
    }

    #[test]
    fn test_definition_may_contain_colons() -> Fallible<()> {
        let text = "ratio: expressed as 2:1\n";
        let terms = parse_topic_content("Math", "math.md", text).map_err(ErrorReport::from)?;
        assert_eq!(terms[0].term(), "ratio");
        assert_eq!(terms[0].definition(), "expressed as 2:1");
        Ok(())
    }

    #[test]
    fn test_line_without_separator_is_an_error() {
        let text = "dog: a dog\njust some prose\n";
        let err = parse_topic_content("Animals", "animals.md", text).unwrap_err();
        assert_eq!(err.line_num, 2);
        assert_eq!(err.source_path, "animals.md");
        assert!(err.message.contains("term: definition"));
    }

    #[test]
    fn test_empty_term_is_an_error() {
        let err = parse_topic_content("Animals", "animals.md", ": a dog\n").unwrap_err();
        assert_eq!(err.line_num, 1);
        assert!(err.message.contains("term text"));
    }

    #[test]
    fn test_empty_definition_is_an_error() {
        let err = parse_topic_content("Animals", "animals.md", "dog:\n").unwrap_err();
        assert_eq!(err.line_num, 1);
        assert!(err.message.contains("definition"));
    }

    #[test]
    fn test_image_reference_is_extracted() -> Fallible<()> {
        let text = "cat: an aloof companion ![photo](cat.jpg)\n";
        let terms = parse_topic_content("Animals", "animals.md", text)
            .map_err(ErrorReport::from)?;
        assert_eq!(terms[0].image(), Some("cat.jpg"));
        Ok(())
    }

    #[test]
    fn test_identical_lines_get_distinct_ids() -> Fallible<()> {
        let text = "dog: a dog\ndog: a dog\n";
        let terms = parse_topic_content("Animals", "animals.md", text)
            .map_err(ErrorReport::from)?;
        assert_eq!(terms.len(), 2);
        assert_ne!(terms[0].id(), terms[1].id());
        Ok(())
    }

    #[test]
    fn test_frontmatter_overrides_topic_name() -> Fallible<()> {
        let text = "---\nname = \"Domestic Animals\"\n---\ndog: a dog\n";
        let files = vec![("animals.md", text)];
        let terms = parse_topics(files.into_iter())?;
        assert_eq!(terms[0].topic(), "Domestic Animals");
        Ok(())
    }

    #[test]
    fn test_filename_is_the_default_topic_name() -> Fallible<()> {
        let files = vec![("animals.md", "dog: a dog\n")];
        let terms = parse_topics(files.into_iter())?;
        assert_eq!(terms[0].topic(), "animals");
        Ok(())
    }

    #[test]
    fn test_unclosed_frontmatter_is_an_error() {
        let text = "---\nname = \"Animals\"\ndog: a dog\n";
        let result = parse_topics(vec![("animals.md", text)].into_iter());
        assert!(result.is_err());
    }

    #[test]
    fn test_terms_from_multiple_files_are_combined() -> Fallible<()> {
        let files = vec![
            ("animals.md", "dog: a dog\ncat: a cat\n"),
            ("colors.md", "red: the color of fire\n"),
        ];
        let terms = parse_topics(files.into_iter())?;
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[2].topic(), "colors");
        Ok(())
    }
}
