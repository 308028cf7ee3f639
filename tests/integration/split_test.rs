//! Manual partition tests: coverage semantics and tag grouping.

use artex::split::{partition, Section, SectionError};
use artex::transcript::ChatLine;

fn lines(n: usize) -> Vec<ChatLine> {
    (0..n)
        .map(|i| ChatLine::parse(&format!("\x031,1 row {i}")))
        .collect()
}

#[test]
fn full_coverage_produces_one_group_per_tag() {
    let sections = vec![
        Section::parse("0-9a").unwrap(),
        Section::parse("10-14b").unwrap(),
        Section::parse("15-19c").unwrap(),
    ];

    let groups = partition(&lines(20), &sections).unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].0, "a");
    assert_eq!(groups[0].1.len(), 10);
    assert_eq!(groups[1].0, "b");
    assert_eq!(groups[1].1.len(), 5);
    assert_eq!(groups[2].0, "c");
    assert_eq!(groups[2].1.len(), 5);
}

#[test]
fn missing_line_five_fails_before_producing_groups() {
    let sections = vec![
        Section::parse("0-4a").unwrap(),
        Section::parse("6-19b").unwrap(),
    ];

    let result = partition(&lines(20), &sections);
    assert_eq!(result.unwrap_err(), SectionError::Uncovered { index: 5 });
}

#[test]
fn single_line_tokens_compose_with_ranges() {
    let sections = vec![
        Section::parse("0a").unwrap(),
        Section::parse("1-2b").unwrap(),
        Section::parse("3a").unwrap(),
    ];

    let groups = partition(&lines(4), &sections).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "a");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].1.len(), 2);
}

#[test]
fn section_past_end_of_file_is_fatal() {
    let sections = vec![Section::parse("0-30a").unwrap()];
    assert!(matches!(
        partition(&lines(20), &sections),
        Err(SectionError::OutOfRange { .. })
    ));
}

#[test]
fn groups_preserve_line_order_and_content() {
    let raw = [
        "\x032,2 top half",
        "\x033,3 bottom half",
        "\x034,4 other piece",
    ];
    let decoded: Vec<ChatLine> = raw.iter().map(|r| ChatLine::parse(r)).collect();
    let sections = vec![
        Section::parse("0-1x").unwrap(),
        Section::parse("2y").unwrap(),
    ];

    let groups = partition(&decoded, &sections).unwrap();
    assert_eq!(groups[0].1[0].message(), Some("\x032,2 top half"));
    assert_eq!(groups[0].1[1].message(), Some("\x033,3 bottom half"));
    assert_eq!(groups[1].1[0].message(), Some("\x034,4 other piece"));
}
