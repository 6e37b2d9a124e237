use frame_summary_core::contract::FrameSummary;
use frame_summary_core::frame::{summarize, summarize_sample, SAMPLE_COLUMN, SAMPLE_VALUES};

#[test]
fn sample_summary_matches_fixed_sequence() {
    let summary = summarize_sample().expect("sample summary should compute");

    assert_eq!(
        summary,
        FrameSummary {
            sum: 15,
            shape: (5, 1),
        }
    );
}

#[test]
fn sample_summary_is_deterministic_across_calls() {
    let first = summarize_sample().expect("first summary");
    for _ in 0..10 {
        assert_eq!(summarize_sample().expect("repeat summary"), first);
    }
}

#[test]
fn sample_summary_body_parses_back_to_expected_values() {
    let body = summarize_sample()
        .and_then(|summary| summary.to_json())
        .expect("sample body should serialize");

    let parsed: serde_json::Value = serde_json::from_str(&body).expect("body should be JSON");
    assert_eq!(parsed["sum"], 15);
    assert_eq!(parsed["shape"], serde_json::json!([5, 1]));
}

#[test]
fn summarize_tracks_row_count_of_arbitrary_input() {
    let summary = summarize(SAMPLE_COLUMN, &[10, -4, 7]).expect("summary should compute");

    assert_eq!(summary.sum, 13);
    assert_eq!(summary.shape, (3, 1));
    assert_eq!(SAMPLE_VALUES.len(), 5);
}
