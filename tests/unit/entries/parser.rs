use super::*;

#[test]
fn weighted_and_plain_lines_round_trip() {
    let entries = parse_entries("Alice * 10\nBob\n  Charlie x 2  ");
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].display_name, "Alice");
    assert_eq!(entries[0].weight, 10);
    assert_eq!(entries[0].raw_text, "Alice * 10");

    assert_eq!(entries[1].display_name, "Bob");
    assert_eq!(entries[1].weight, 1);

    assert_eq!(entries[2].display_name, "Charlie");
    assert_eq!(entries[2].weight, 2);
    assert_eq!(entries[2].raw_text, "Charlie x 2");
}

#[test]
fn empty_lines_are_dropped_and_order_kept() {
    let entries = parse_entries("\nAlice\n\n   \nBob\n");
    let names: Vec<_> = entries.iter().map(|e| e.display_name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
}

#[test]
fn duplicates_are_allowed() {
    let entries = parse_entries("Alice\nAlice");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], entries[1]);
}

#[test]
fn separator_is_case_insensitive_and_whitespace_optional() {
    for line in ["Dana*3", "Dana *3", "Dana* 3", "Dana X 3", "Dana x3"] {
        let entry = parse_line(line).unwrap();
        assert_eq!(entry.display_name, "Dana", "line {line:?}");
        assert_eq!(entry.weight, 3, "line {line:?}");
    }
}

#[test]
fn missing_suffix_defaults_to_weight_one() {
    let entry = parse_line("Bob 5").unwrap();
    assert_eq!(entry.display_name, "Bob 5");
    assert_eq!(entry.weight, 1);
}

#[test]
fn zero_weight_degrades_to_one() {
    let entry = parse_line("Alice * 0").unwrap();
    assert_eq!(entry.display_name, "Alice");
    assert_eq!(entry.weight, 1);
}

#[test]
fn overflowing_weight_degrades_to_one() {
    let entry = parse_line("Alice * 99999999999999999999").unwrap();
    assert_eq!(entry.display_name, "Alice");
    assert_eq!(entry.weight, 1);
}

#[test]
fn name_containing_separator_char_still_parses() {
    // Last separator before the trailing digits wins.
    let entry = parse_line("Felix * 2").unwrap();
    assert_eq!(entry.display_name, "Felix");
    assert_eq!(entry.weight, 2);

    let entry = parse_line("a x 2 x 3").unwrap();
    assert_eq!(entry.display_name, "a x 2");
    assert_eq!(entry.weight, 3);
}

#[test]
fn suffix_without_name_yields_empty_display_name() {
    let entry = parse_line("x3").unwrap();
    assert_eq!(entry.display_name, "");
    assert_eq!(entry.weight, 3);
}
