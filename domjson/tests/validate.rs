// SPDX-License-Identifier: Apache-2.0

// Black-box validation tests. The accept/reject grids are generated the
// same way for every case so new inputs are a one-line addition.

use domjson::{decode, validate};

macro_rules! accept_tests {
    ($($name:ident: $input:expr,)*) => {
        $(
            paste::paste! {
                #[test]
                fn [<accepts_ $name>]() {
                    let input: &[u8] = $input;
                    let result = validate(input);
                    assert!(
                        result.is_ok(),
                        "{:?} should validate but failed: {}",
                        String::from_utf8_lossy(input),
                        result.unwrap_err()
                    );
                    // Everything the validator accepts, the decoder accepts.
                    assert!(decode(input).is_ok());
                }
            }
        )*
    };
}

macro_rules! reject_tests {
    ($($name:ident: $input:expr,)*) => {
        $(
            paste::paste! {
                #[test]
                fn [<rejects_ $name>]() {
                    let input: &[u8] = $input;
                    assert!(
                        validate(input).is_err(),
                        "{:?} should fail validation",
                        String::from_utf8_lossy(input)
                    );
                }
            }
        )*
    };
}

accept_tests! {
    null: b"null",
    booleans: b"true",
    integer: b"123456",
    negative_integer: b"-7",
    float: b"123.456",
    float_full_grammar: b"0.12e-123",
    uppercase_exponent: b"1E+2",
    empty_string: br#""""#,
    escaped_string: br#""a\tb\u1234""#,
    empty_array: b"[]",
    empty_object: b"{}",
    nested_containers: br#"[1, [2.0, {"k": [null, true]}], "s"]"#,
    surrounding_whitespace: b"  \t\n 1 \r\n ",
    string_then_whitespace: b"\"a\"   ",
    end_to_end_document: br#"{"k1":"v1","k2":["v2"],"k3":{"k4":["v1"],"k5":"v2"},"k4":null,"k5":true,"k6":false,"k7":123456}"#,
}

reject_tests! {
    empty_input: b"",
    only_whitespace: b"   ",
    bare_minus: b"-",
    bare_plus: b"+",
    digitless_fraction: b"0.",
    digitless_exponent: b"1234e",
    doubled_exponent_marker: b"1234eE123",
    sign_without_exponent_digits: b"12e+",
    misspelled_null: b"nul",
    misspelled_true: b"ture",
    unquoted_word: b"hello",
    unterminated_string: b"\"abc",
    bad_escape: br#""\q""#,
    bad_unicode_hex: br#""\uZZZZ""#,
    lone_surrogate: br#""\uD800""#,
    trailing_comma_array: b"[1,]",
    unclosed_array: br#"["k1","value""#,
    missing_comma: b"[1 2]",
    unclosed_object: br#"{"k": 1"#,
    missing_colon: br#"{"k" 1}"#,
    non_string_key: b"{1234: true}",
    trailing_tokens: b"\"a\" , 1",
    two_top_level_values: b"1 2",
}

#[test]
fn rejected_inputs_also_fail_to_decode() {
    let inputs: &[&[u8]] = &[
        b"",
        b"-",
        b"0.",
        b"1234e",
        b"[1,]",
        br#"{"k" 1}"#,
        b"{1234: true}",
        br#""\q""#,
        b"\"abc",
    ];
    for input in inputs {
        assert!(
            decode(input).is_err(),
            "{:?} should fail to decode",
            String::from_utf8_lossy(input)
        );
    }
}

#[test]
fn messages_are_inspectable_values() {
    let err = validate(b"-").unwrap_err();
    assert_eq!(err.message(), "there needs to be a digit after - or +");
    assert_eq!(err.position(), 1);

    let err = validate(b"\"a\" , 1").unwrap_err();
    assert_eq!(
        err.message(),
        "there are extra characters at the end of the document"
    );
    assert_eq!(err.position(), 4);

    let err = validate(b"{1234: true}").unwrap_err();
    assert_eq!(err.message(), "object keys can only be strings");
    assert_eq!(err.position(), 1);
}

#[test]
fn display_renders_the_context_window() {
    let rendered = validate(br#"{"key": nuLl}"#).unwrap_err().to_string();
    assert!(rendered.contains("error around"), "got: {rendered}");
    assert!(rendered.contains("reading in null"), "got: {rendered}");
}
