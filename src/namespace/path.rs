/// Splits a path into its non-empty `/`-separated segments.
///
/// Leading, trailing and repeated separators produce no segments, so
/// `/a//b/` yields `["a", "b"]` and both `""` and `"/"` yield nothing.
/// There is no notion of `.` or `..`; they are ordinary segment names.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Splits a path into its parent segments and its last segment.
///
/// Returns `None` when the path has no segments, i.e. it names the root.
pub fn split_leaf(path: &str) -> Option<(Vec<&str>, &str)> {
    let mut segments = split_path(path);
    let leaf = segments.pop()?;
    Some((segments, leaf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/a/b", vec!["a", "b"])]
    #[case("a/b", vec!["a", "b"])]
    #[case("/a//b/", vec!["a", "b"])]
    #[case("///", vec![])]
    #[case("", vec![])]
    #[case("/", vec![])]
    #[case("/documents/file1.txt", vec!["documents", "file1.txt"])]
    #[case("/./..", vec![".", ".."])]
    fn split_path_discards_empty_segments(#[case] path: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_path(path), expected);
    }

    #[test]
    fn split_leaf_separates_parent_from_name() {
        let (parents, leaf) = split_leaf("/documents/photos/photo1.png").unwrap();
        assert_eq!(parents, vec!["documents", "photos"]);
        assert_eq!(leaf, "photo1.png");
    }

    #[test]
    fn split_leaf_of_top_level_name_has_no_parents() {
        let (parents, leaf) = split_leaf("music/").unwrap();
        assert!(parents.is_empty());
        assert_eq!(leaf, "music");
    }

    #[rstest]
    #[case("")]
    #[case("/")]
    #[case("//")]
    fn split_leaf_of_root_is_none(#[case] path: &str) {
        assert!(split_leaf(path).is_none());
    }
}
