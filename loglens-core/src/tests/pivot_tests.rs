use crate::normalize::normalize_rows;
use crate::pivot::build_pivot;
use crate::tests::support::{date, raw_row};
use pretty_assertions::assert_eq;

#[test]
fn groups_sum_counts_per_status() {
    // Arrange
    let rows = normalize_rows(&[
        raw_row("2024-01-01", "/v1/mobile/search", "GET", 200, 8),
        raw_row("2024-01-01", "/v1/mobile/search", "GET", 200, 4),
        raw_row("2024-01-01", "/v1/mobile/search", "GET", 400, 2),
    ])
    .unwrap();

    // Act
    let pivot = build_pivot(&rows);

    // Assert
    assert_eq!(pivot.len(), 1);
    assert_eq!(pivot[0].counts[&200], 12);
    assert_eq!(pivot[0].counts[&400], 2);
}

#[test]
fn every_profile_carries_the_whole_status_universe() {
    // Two groups, disjoint status codes. Each profile must still carry a
    // zero-filled entry for the codes it never observed.
    let rows = normalize_rows(&[
        raw_row("2024-01-01", "/v1/mobile/search", "GET", 200, 8),
        raw_row("2024-01-02", "/v1/web/orders", "POST", 503, 1),
    ])
    .unwrap();

    // Act
    let pivot = build_pivot(&rows);

    // Assert
    assert_eq!(pivot.len(), 2);
    for row in &pivot {
        assert_eq!(row.counts.len(), 2);
        assert!(row.counts.contains_key(&200));
        assert!(row.counts.contains_key(&503));
    }
    assert_eq!(pivot[0].counts[&503], 0);
    assert_eq!(pivot[1].counts[&200], 0);
}

#[test]
fn output_is_ordered_by_date_method_entity() {
    // Arrange: deliberately shuffled input.
    let rows = normalize_rows(&[
        raw_row("2024-01-02", "/v1/web/orders", "POST", 200, 1),
        raw_row("2024-01-01", "/v1/web/orders", "POST", 200, 1),
        raw_row("2024-01-01", "/v1/mobile/search", "POST", 200, 1),
        raw_row("2024-01-01", "/v1/mobile/search", "GET", 200, 1),
    ])
    .unwrap();

    // Act
    let pivot = build_pivot(&rows);

    // Assert
    let keys: Vec<_> = pivot
        .iter()
        .map(|r| (r.date, r.method.as_str(), r.entity_id.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            (date("2024-01-01"), "GET", "/v1/mobile/search"),
            (date("2024-01-01"), "POST", "/v1/mobile/search"),
            (date("2024-01-01"), "POST", "/v1/web/orders"),
            (date("2024-01-02"), "POST", "/v1/web/orders"),
        ]
    );
}

#[test]
fn empty_batch_builds_empty_pivot() {
    // Act
    let pivot = build_pivot(&[]);

    // Assert
    assert!(pivot.is_empty());
}
