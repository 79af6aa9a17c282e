//! Integration tests for the description-to-comment pipeline
//!
//! These tests drive realistic API reference fragments through prose
//! conversion and delimited wrapping, the way the code generator does.

use apidoc_normalizer::{DocFragment, DocNormalizer, NormalizeError, NormalizerOptions};
use proptest::prelude::*;
use std::sync::Arc;

fn normalizer(width: usize) -> DocNormalizer {
    DocNormalizer::new(
        NormalizerOptions::default()
            .with_max_line_width(width)
            .with_base_url("https://t.me")
            .with_docs_url("https://t.me/api"),
    )
    .expect("Failed to build normalizer")
}

#[test]
fn test_links_resolved_on_one_logical_line() {
    let html = r#"<p>See <a href="/docs/x">here</a> for --http://example.com/y--.</p>"#;
    let prose = normalizer(110).prose(&DocFragment::from(html));

    assert!(prose.contains("See here (https://t.me/docs/x) for (http://example.com/y)."));
    assert!(!prose.contains('\n'));
}

#[test]
fn test_method_description_comment() {
    let html = concat!(
        r#"Use this method to send text messages. On success, the sent "#,
        r##"<a href="#message">Message</a> is returned."##,
    );
    let comment = normalizer(60).comment(html, "// ").expect("Failed to wrap");

    assert_eq!(
        comment,
        "// Use this method to send text messages. On success, the\n\
         // sent Message (https://t.me/api#message) is returned."
    );
}

#[test]
fn test_field_description_with_entities_and_emphasis() {
    let html = r#"<em>Optional</em>. Caption of the photo, 0-1024 characters &amp; entities"#;
    let normalizer = normalizer(110);

    assert!(normalizer.is_optional_description(html));
    assert_eq!(
        normalizer.comment(html, "\t// ").expect("Failed to wrap"),
        "\t// Optional. Caption of the photo, 0-1024 characters & entities"
    );
}

#[test]
fn test_paragraph_breaks_become_comment_lines() {
    let html = "<p>First paragraph.</p><p>Second paragraph.</p>";
    let comment = normalizer(110).comment(html, "// ").expect("Failed to wrap");

    assert_eq!(comment, "// First paragraph.\n// Second paragraph.");
}

#[test]
fn test_three_lines_in_one_token_is_an_error() {
    // "a\nb\nc" survives collapsing as a single token with two breaks
    let result = normalizer(110).comment("a<br>b<br>c", "// ");

    match result {
        Err(NormalizeError::MalformedBreak { token, segments }) => {
            assert_eq!(token, "a\nb\nc");
            assert_eq!(segments, 3);
        }
        other => panic!("Expected MalformedBreak, got {:?}", other),
    }
}

#[test]
fn test_shared_across_threads() {
    let normalizer = Arc::new(normalizer(40));
    let html = r##"Identifier of the <a href="#chat">chat</a> to send to"##;
    let expected = normalizer.comment(html, "// ").expect("Failed to wrap");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let normalizer = Arc::clone(&normalizer);
            let expected = expected.clone();
            scope.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(normalizer.comment(html, "// ").unwrap(), expected);
                }
            });
        }
    });
}

proptest! {
    #[test]
    fn prop_comment_lines_respect_width(
        words in prop::collection::vec("[a-z]{1,12}", 1..40),
        width in 20usize..80,
    ) {
        let html = format!("<p>{}</p>", words.join(" "));
        let comment = normalizer(width).comment(&html, "// ").unwrap();
        let lines: Vec<&str> = comment.lines().collect();

        // the delimiter only counts toward the first line
        prop_assert!(lines[0].chars().count() <= width);
        for line in &lines[1..] {
            let body = line.strip_prefix("// ").unwrap();
            prop_assert!(body.chars().count() <= width);
        }

        let rejoined: Vec<&str> = lines
            .iter()
            .flat_map(|line| line.strip_prefix("//").unwrap().split_whitespace())
            .collect();
        prop_assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
