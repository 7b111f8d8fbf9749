//! Whole-array text output layout and stream input.

use intarray_core::{IntArray, IntArrayError, TokenReader};
use intarray_test_utils::{array_from, random_values, sequential, token_text};

#[test]
fn five_values_on_one_line() {
    assert_eq!(array_from(&[1, 2, 3, 4, 5]).to_string(), "1 2 3 4 5 \n");
}

#[test]
fn twelve_values_wrap_after_the_tenth() {
    let text = sequential(12).to_string();
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    assert_eq!(lines, ["1 2 3 4 5 6 7 8 9 10 \n", "11 12 \n"]);
}

#[test]
fn ten_values_end_with_a_single_break() {
    let text = sequential(10).to_string();
    assert_eq!(text, "1 2 3 4 5 6 7 8 9 10 \n");
    assert_eq!(text.matches('\n').count(), 1);
}

#[test]
fn write_to_does_not_modify_the_array() {
    let a = sequential(3);
    let mut out = Vec::new();
    a.write_to(&mut out).unwrap();
    a.write_to(&mut out).unwrap();
    assert_eq!(out, b"1 2 3 \n1 2 3 \n");
    assert_eq!(a.as_slice(), &[1, 2, 3]);
}

#[test]
fn written_text_reads_back_identically() {
    let values = random_values(0x5eed, 137);
    let original = array_from(&values);
    let mut out = Vec::new();
    original.write_to(&mut out).unwrap();

    let mut copy = IntArray::new(137);
    copy.read_from(&mut TokenReader::new(out.as_slice())).unwrap();
    assert_eq!(copy, original);
}

#[test]
fn one_stream_fills_several_arrays() {
    let mut text = token_text(&[1, 2, 3, 4, 5, 6, 7]);
    text.push_str("8 9 10 11 12 13 14 15 16 17\n");
    let mut input = TokenReader::new(text.as_bytes());

    let mut seven = IntArray::new(7);
    let mut ten = IntArray::default();
    seven.read_from(&mut input).unwrap();
    ten.read_from(&mut input).unwrap();

    assert_eq!(seven, sequential(7));
    assert_eq!(ten.as_slice(), &[8, 9, 10, 11, 12, 13, 14, 15, 16, 17]);
    assert!(input.next_token().unwrap().is_none());
}

#[test]
fn short_input_is_reported_and_harmless() {
    let mut a = sequential(5);
    let err = a.read_from_str("10 20 30").unwrap_err();
    assert!(matches!(
        err,
        IntArrayError::UnexpectedEof {
            expected: 5,
            read: 3
        }
    ));
    assert_eq!(a, sequential(5));
}

#[test]
fn malformed_input_is_reported_and_harmless() {
    let mut a = sequential(3);
    let err = a.read_from_str("1 2.5 3").unwrap_err();
    assert_eq!(err.to_string(), "malformed integer \"2.5\" for element 1");
    assert_eq!(a, sequential(3));
}
