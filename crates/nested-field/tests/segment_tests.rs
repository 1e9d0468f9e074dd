/// Segment and path parsing tests.
///
/// Covers the plain/indexed classification, key and index extraction,
/// malformed bracket contents, and the `Path` constructors.
use nested_field::{Path, PathError, Segment};

// ============================================================================
// 1. Indexed segments
// ============================================================================

#[test]
fn bare_index_has_empty_key() {
    let seg = Segment::parse("[1]").unwrap();
    assert_eq!(seg.key(), "");
    assert_eq!(seg.index(), Some(1));
    assert!(seg.is_indexed());
}

#[test]
fn key_with_single_digit_index() {
    let seg = Segment::parse("name[1]").unwrap();
    assert_eq!(seg.key(), "name");
    assert_eq!(seg.index(), Some(1));
    assert_eq!(seg.raw(), "name[1]");
}

#[test]
fn key_with_multi_digit_index() {
    let seg = Segment::parse("name[100]").unwrap();
    assert_eq!(seg.key(), "name");
    assert_eq!(seg.index(), Some(100));
}

#[test]
fn leading_zeros_are_accepted() {
    let seg = Segment::parse("items[007]").unwrap();
    assert_eq!(seg.index(), Some(7));
}

// ============================================================================
// 2. Plain segments
// ============================================================================

#[test]
fn plain_segment_keeps_raw_key() {
    let seg = Segment::parse("good").unwrap();
    assert_eq!(seg.key(), "good");
    assert_eq!(seg.index(), None);
    assert!(!seg.is_indexed());
}

#[test]
fn bracket_not_at_end_is_plain() {
    // No trailing `]`, so there is nothing to index with.
    let seg = Segment::parse("a[1]b").unwrap();
    assert_eq!(seg.key(), "a[1]b");
    assert_eq!(seg.index(), None);
}

#[test]
fn unopened_closing_bracket_is_plain() {
    let seg = Segment::parse("weird]").unwrap();
    assert_eq!(seg.key(), "weird]");
    assert!(!seg.is_indexed());
}

#[test]
fn empty_segment_is_plain() {
    let seg = Segment::parse("").unwrap();
    assert_eq!(seg.key(), "");
    assert!(!seg.is_indexed());
}

// ============================================================================
// 3. Malformed indices
// ============================================================================

#[test]
fn empty_brackets_are_malformed() {
    let err = Segment::parse("name[]").unwrap_err();
    assert_eq!(
        err,
        PathError::MalformedIndex {
            segment: "name[]".into()
        }
    );
}

#[test]
fn non_digit_index_is_malformed() {
    assert!(matches!(
        Segment::parse("name[x]"),
        Err(PathError::MalformedIndex { .. })
    ));
}

#[test]
fn negative_index_is_malformed() {
    assert!(matches!(
        Segment::parse("name[-1]"),
        Err(PathError::MalformedIndex { .. })
    ));
}

#[test]
fn chained_indices_are_malformed() {
    assert!(matches!(
        Segment::parse("grid[1][2]"),
        Err(PathError::MalformedIndex { .. })
    ));
}

#[test]
fn overflowing_index_is_malformed() {
    let err = Segment::parse("name[99999999999999999999999999]").unwrap_err();
    assert!(
        matches!(err, PathError::MalformedIndex { .. }),
        "got {err:?}"
    );
}

#[test]
fn malformed_index_message_names_the_segment() {
    let err = Segment::parse("clouds[one]").unwrap_err();
    assert_eq!(err.to_string(), "malformed index in segment `clouds[one]`");
}

// ============================================================================
// 4. Paths
// ============================================================================

#[test]
fn path_from_segment_list() {
    let path = Path::parse(["jenkins", "clouds[1]", "name"]).unwrap();
    let keys: Vec<&str> = path.segments().iter().map(Segment::key).collect();
    assert_eq!(keys, ["jenkins", "clouds", "name"]);
    assert_eq!(path.segments()[1].index(), Some(1));
}

#[test]
fn path_from_owned_strings() {
    let raw = vec!["a".to_string(), "b[0]".to_string()];
    let path = Path::parse(&raw).unwrap();
    assert_eq!(path.len(), 2);
    assert!(!path.is_empty());
}

#[test]
fn single_segment_path_is_not_empty() {
    let path = Path::parse(["a"]).unwrap();
    assert_eq!(path.len(), 1);
    assert!(!path.is_empty());
}

#[test]
fn dotted_path_matches_segment_list() {
    let dotted = Path::from_dotted("jenkins.clouds[1].name").unwrap();
    let listed = Path::parse(["jenkins", "clouds[1]", "name"]).unwrap();
    assert_eq!(dotted, listed);
}

#[test]
fn from_str_uses_dotted_notation() {
    let path: Path = "a.b[2].c".parse().unwrap();
    assert_eq!(path.to_string(), "a.b[2].c");
}

#[test]
fn empty_segment_list_is_rejected() {
    let empty: [&str; 0] = [];
    assert_eq!(Path::parse(empty).unwrap_err(), PathError::EmptyPath);
    assert_eq!(Path::new(Vec::new()).unwrap_err(), PathError::EmptyPath);
}

#[test]
fn empty_dotted_path_is_rejected() {
    assert_eq!(Path::from_dotted("").unwrap_err(), PathError::EmptyPath);
}

#[test]
fn malformed_segment_fails_the_whole_path() {
    assert!(matches!(
        Path::from_dotted("a.b[z].c"),
        Err(PathError::MalformedIndex { .. })
    ));
}

#[test]
fn prefix_renders_consumed_segments() {
    let path = Path::from_dotted("jenkins.clouds[1].name").unwrap();
    assert_eq!(path.prefix(0), "<root>");
    assert_eq!(path.prefix(2), "jenkins.clouds[1]");
    assert_eq!(path.prefix(10), "jenkins.clouds[1].name");
}

#[test]
fn split_last_separates_target() {
    let path = Path::parse(["job", "luck"]).unwrap();
    let (last, parents) = path.split_last();
    assert_eq!(last.key(), "luck");
    assert_eq!(parents.len(), 1);
    assert_eq!(parents[0].key(), "job");
}
