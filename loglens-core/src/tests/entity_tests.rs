use crate::entity::decompose;

#[test]
fn four_segment_path_decomposes() {
    // Act
    let key = decompose("/v1/mobile/search");

    // Assert: leading slash makes segment 0 empty, so "mobile" is segment 2.
    assert_eq!(key.category.as_deref(), Some("mobile"));
    assert_eq!(key.name_extract.as_deref(), Some("search"));
}

#[test]
fn category_is_lower_cased() {
    // Act
    let key = decompose("/v1/Mobile/Search");

    // Assert: only the category is folded; the name extract is kept as-is.
    assert_eq!(key.category.as_deref(), Some("mobile"));
    assert_eq!(key.name_extract.as_deref(), Some("Search"));
}

#[test]
fn two_segment_path_leaves_both_absent() {
    // Act
    let key = decompose("/v1");

    // Assert
    assert_eq!(key.category, None);
    assert_eq!(key.name_extract, None);
}

#[test]
fn three_segment_path_has_category_only() {
    // Act
    let key = decompose("/v1/mobile");

    // Assert
    assert_eq!(key.category.as_deref(), Some("mobile"));
    assert_eq!(key.name_extract, None);
}

#[test]
fn extra_segments_are_ignored() {
    // Act
    let key = decompose("/v1/mobile/search/deep/deeper");

    // Assert
    assert_eq!(key.category.as_deref(), Some("mobile"));
    assert_eq!(key.name_extract.as_deref(), Some("search"));
}

#[test]
fn empty_string_decomposes_to_nothing() {
    // Act
    let key = decompose("");

    // Assert
    assert_eq!(key.category, None);
    assert_eq!(key.name_extract, None);
}
