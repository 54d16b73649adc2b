//! Tests for path splitting, classification and canonicalization.

use urlkit::*;

#[test]
fn test_path_classification() {
    assert!(Path::parse("/a/b").is_absolute());
    assert!(Path::parse("a/b").is_relative());

    let empty = Path::parse("");
    assert!(!empty.is_absolute());
    assert!(!empty.is_relative());
}

#[test]
fn test_path_canonify_examples() {
    let test_cases = vec![
        ("/a/./b/../c", vec!["", "a", "c"], "/a/c"),
        ("a/../../b", vec!["b"], "b"),
        ("/a/b/c/../../..", vec![""], ""),
        ("./a/./b/.", vec!["a", "b"], "a/b"),
        ("../../x/y/..", vec!["x"], "x"),
    ];

    for (input, segments, string) in test_cases {
        let mut path = Path::parse(input);
        path.canonify();
        assert_eq!(path.segments(), segments.as_slice(), "Canonify failed for: {}", input);
        assert_eq!(path.to_string(), string, "Canonify string failed for: {}", input);
    }
}

#[test]
fn test_path_canonify_is_chainable() {
    let mut path = Path::parse("/a/../b");
    let rendered = path.canonify().to_string();
    assert_eq!(rendered, "/b");
    assert!(path.is_absolute());
}

#[test]
fn test_url_path_canonify_in_place() {
    let mut url = Url::parse("http://example.com/docs/./api/../guide/index.html").unwrap();
    url.path_mut().canonify();

    assert_eq!(url.to_string(), "http://example.com/docs/guide/index.html");
    assert_eq!(url.path().filename(), Some("index.html"));
}

#[test]
fn test_url_set_path_rewraps() {
    let mut url = Url::parse("http://example.com/").unwrap();

    url.set_path(String::from("/x//y"));
    assert_eq!(url.path().segments(), ["", "x", "y"]);

    url.set_path(vec!["rel".to_string(), "p".to_string()]);
    assert!(url.path().is_relative());
    assert_eq!(url.to_string(), "http://example.com/rel/p");

    url.set_path(Path::from_segments(["", "z"]));
    assert_eq!(url.to_string(), "http://example.com/z");
}

#[test]
fn test_path_deref_to_slice() {
    let path = Path::parse("/api/v1/users");

    assert_eq!(path.len(), 4);
    assert_eq!(path.last().map(String::as_str), Some("users"));
    assert_eq!(path.iter().filter(|s| !s.is_empty()).count(), 3);
}
