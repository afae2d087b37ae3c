//! Integration tests for seed data: the built-in default and TOML seed files.

use std::io::Write;
use std::path::Path;

use threadview_core::seed::{default_seed, load_seed, parse_seed};
use threadview_core::{count_nodes, CommentId, CoreError, ReplyText, SequentialIds};

fn write_seed(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn default_seed_is_single_hello() {
    let tree = default_seed();
    assert_eq!(tree.len(), 1);
    let root = &tree[0];
    assert_eq!(root.id, CommentId::from("1"));
    assert_eq!(root.text, "Hello");
    assert!(root.can_reply);
    assert!(!root.is_reply_box_open);
    assert!(!root.is_collapsed);
    assert!(root.is_leaf());
}

#[test]
fn load_nested_seed_file() {
    let file = write_seed(
        r#"
[[comment]]
id = "welcome"
text = "Hello"

[[comment.reply]]
text = "First reply"

[[comment.reply.reply]]
text = "Nested"
can_reply = false

[[comment]]
text = "Second root"
"#,
    );
    let ids = SequentialIds::new("seed-");
    let tree = load_seed(file.path(), &ids).unwrap();

    assert_eq!(tree.len(), 2);
    assert_eq!(count_nodes(&tree), 4);
    assert_eq!(tree[0].id, CommentId::from("welcome"));
    assert_eq!(tree[0].children[0].text, "First reply");

    let nested = &tree[0].children[0].children[0];
    assert_eq!(nested.text, "Nested");
    assert!(!nested.can_reply);
    assert!(tree[1].can_reply, "can_reply defaults to true");

    // Generated ids are unique and come from the supplied generator.
    assert!(tree[0].children[0].id.as_str().starts_with("seed-"));
    assert_ne!(tree[0].children[0].id, tree[1].id);
}

#[test]
fn empty_seed_file_gives_empty_forest() {
    let ids = SequentialIds::new("s");
    let tree = parse_seed("", Path::new("empty.toml"), &ids).unwrap();
    assert!(tree.is_empty());
}

#[test]
fn duplicate_ids_are_rejected() {
    let ids = SequentialIds::new("s");
    let raw = r#"
[[comment]]
id = "a"
text = "one"

[[comment.reply]]
id = "a"
text = "two"
"#;
    let err = parse_seed(raw, Path::new("dup.toml"), &ids).unwrap_err();
    assert!(matches!(err, CoreError::DuplicateId(ref id) if id.as_str() == "a"), "{err}");
}

#[test]
fn view_flags_in_seed_are_rejected() {
    let ids = SequentialIds::new("s");
    let raw = r#"
[[comment]]
text = "one"
is_collapsed = true
"#;
    let err = parse_seed(raw, Path::new("flags.toml"), &ids).unwrap_err();
    assert!(matches!(err, CoreError::SeedParse { .. }), "{err}");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let ids = SequentialIds::new("s");
    let err = load_seed(&dir.path().join("absent.toml"), &ids).unwrap_err();
    assert!(matches!(err, CoreError::SeedIo { .. }), "{err}");
}

#[test]
fn empty_reply_text_is_rejected() {
    assert!(matches!(ReplyText::new(""), Err(CoreError::EmptyReply)));
    assert_eq!(ReplyText::try_from("  ").unwrap().as_str(), "  ");
}
