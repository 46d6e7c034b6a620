use super::*;

#[test]
fn test_line_from_offset() {
    let source = "line1\nline2\nline3";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(5), 1);
    assert_eq!(table.line_from_offset(6), 2);
    assert_eq!(table.line_from_offset(11), 2);
    assert_eq!(table.line_from_offset(12), 3);
    assert_eq!(table.line_count(), 3);
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
    assert_eq!(table.offset_to_line_col(source, 11), (3, 2));
}

#[test]
fn test_columns_count_characters() {
    let source = "var é = \"ü\"; x";
    let table = LineOffsetTable::build(source);
    let x_offset = u32::try_from(source.find('x').unwrap_or(0)).unwrap_or(0);
    assert_eq!(table.offset_to_line_col(source, x_offset), (1, 14));
}

#[test]
fn test_position_of_span() {
    let source = "var a = 1;\nprint(a);";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.position(source, Span::new(11, 16)), Position::new(2, 1));
}

#[test]
fn test_line_text() {
    let source = "first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("first"));
    assert_eq!(table.line_text(source, 2), Some("second"));
    assert_eq!(table.line_text(source, 3), Some("third"));
    assert_eq!(table.line_text(source, 4), None);
    assert_eq!(table.line_text(source, 0), None);
}
