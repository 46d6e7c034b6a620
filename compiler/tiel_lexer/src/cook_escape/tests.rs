use super::*;

#[test]
fn test_plain_string() {
    assert_eq!(
        scan_string("hello\" + 1"),
        StringScan::Closed {
            cooked: "hello".into(),
            consumed: 6,
        }
    );
}

#[test]
fn test_escapes() {
    assert_eq!(
        scan_string(r#"a\n\t\r\\\"\0b""#),
        StringScan::Closed {
            cooked: "a\n\t\r\\\"\0b".into(),
            consumed: 15,
        }
    );
}

#[test]
fn test_multiline() {
    assert_eq!(
        scan_string("one\ntwo\""),
        StringScan::Closed {
            cooked: "one\ntwo".into(),
            consumed: 8,
        }
    );
}

#[test]
fn test_unterminated() {
    assert_eq!(
        scan_string("never closed"),
        StringScan::Unterminated { consumed: 12 }
    );
    assert_eq!(scan_string("dangling\\"), StringScan::Unterminated { consumed: 9 });
}

#[test]
fn test_invalid_escape() {
    assert_eq!(
        scan_string(r#"ab\qc""#),
        StringScan::InvalidEscape {
            escape: 'q',
            offset: 2,
            consumed: 4,
        }
    );
}
