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

use pulldown_cmark::CowStr;
use pulldown_cmark::Event;
use pulldown_cmark::Options;
use pulldown_cmark::Parser;
use pulldown_cmark::Tag;
use pulldown_cmark::html::push_html;

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options
}

/// Convert Markdown to HTML.
///
/// The optional `url_rewriter` function can be used to rewrite URLs in
/// image references.
pub fn markdown_to_html(markdown: &str, url_rewriter: Option<&dyn Fn(&str) -> String>) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let events = parser.map(|event| match event {
        Event::Start(Tag::Image {
            link_type,
            title,
            dest_url,
            id,
        }) => {
            let url = match url_rewriter {
                Some(rewriter) => rewriter(&dest_url),
                None => dest_url.to_string(),
            };
            Event::Start(Tag::Image {
                link_type,
                title,
                dest_url: CowStr::Boxed(url.into_boxed_str()),
                id,
            })
        }
        _ => event,
    });
    let mut html_output: String = String::new();
    push_html(&mut html_output, events);
    html_output
}

/// Like [`markdown_to_html`], but strips the outer paragraph so the result
/// can be embedded inline.
pub fn markdown_to_html_inline(
    markdown: &str,
    url_rewriter: Option<&dyn Fn(&str) -> String>,
) -> String {
    let text = markdown_to_html(markdown, url_rewriter);
    if text.starts_with("<p>") && text.ends_with("</p>\n") {
        let len = text.len();
        text[3..len - 5].to_string()
    } else {
        text
    }
}

/// Return the URL of the first image reference in a Markdown snippet, if
/// there is one.
pub fn first_image_url(markdown: &str) -> Option<String> {
    Parser::new_ext(markdown, parser_options()).find_map(|event| match event {
        Event::Start(Tag::Image { dest_url, .. }) => Some(dest_url.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_html_basic() {
        let markdown = "This is **bold** text.";
        let html = markdown_to_html(markdown, None);
        assert_eq!(html, "<p>This is <strong>bold</strong> text.</p>\n");
    }

    #[test]
    fn test_markdown_to_html_inline() {
        let markdown = "This is **bold** text.";
        let html = markdown_to_html_inline(markdown, None);
        assert_eq!(html, "This is <strong>bold</strong> text.");
    }

    #[test]
    fn test_markdown_to_html_inline_heading() {
        let markdown = "# Foo";
        let html = markdown_to_html_inline(markdown, None);
        assert_eq!(html, "<h1>Foo</h1>\n");
    }

    #[test]
    fn test_markdown_with_url_rewriter() {
        let markdown = "![alt](image.png)";
        let rewriter = |url: &str| format!("/file/{}", url);
        let html = markdown_to_html(markdown, Some(&rewriter));
        assert!(html.contains("/file/image.png"));
    }

    #[test]
    fn test_first_image_url() {
        assert_eq!(
            first_image_url("a cat ![photo](cat.jpg) indeed"),
            Some("cat.jpg".to_string())
        );
        assert_eq!(first_image_url("no images here"), None);
    }

    #[test]
    fn test_first_image_url_takes_the_first() {
        let markdown = "![a](one.png) ![b](two.png)";
        assert_eq!(first_image_url(markdown), Some("one.png".to_string()));
    }
}
