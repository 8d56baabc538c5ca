use crate::error::SummaryError;
use crate::summary::summarize;
use crate::tests::support::profile;

#[test]
fn totals_sum_over_the_whole_selection() {
    // Arrange
    let profiles = vec![
        profile("2024-01-01", "GET", Some("mobile"), 8, 2, 10, 20),
        profile("2024-01-02", "POST", Some("web"), 5, 1, 6, 16),
    ];

    // Act
    let totals = summarize(&profiles).unwrap();

    // Assert
    assert_eq!(totals.total_requests, 16);
    assert_eq!(totals.total_success, 13);
    assert_eq!(totals.total_fail, 3);
    // floor(100 * 3 / 16) = floor(18.75)
    assert_eq!(totals.fail_pct, 18);
}

#[test]
fn zero_total_requests_is_a_hard_error() {
    // Unlike the per-profile sentinel, the summary surfaces the undefined
    // rate as an error.
    let err = summarize(&[]).unwrap_err();

    // Assert
    assert_eq!(err, SummaryError::DivisionUndefined);
}

#[test]
fn zero_total_with_profiles_present_is_still_an_error() {
    // Arrange: profiles exist but carry no taxonomy volume.
    let profiles = vec![profile("2024-01-01", "GET", Some("mobile"), 0, 0, 0, -1)];

    // Act
    let err = summarize(&profiles).unwrap_err();

    // Assert
    assert_eq!(err, SummaryError::DivisionUndefined);
}
