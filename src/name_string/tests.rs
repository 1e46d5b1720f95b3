#![cfg(test)]
use super::{is_valid_name, NC_MAX_NAME_SIZE};

#[test]
fn test_valid_names() {
    assert_eq!(true, is_valid_name("a"));
    assert_eq!(true, is_valid_name("A"));
    assert_eq!(true, is_valid_name("0"));
    assert_eq!(true, is_valid_name("_"));
    assert_eq!(true, is_valid_name("_FillValue"));
    assert_eq!(true, is_valid_name("air_temperature"));
    assert_eq!(true, is_valid_name("var.with.dots"));
    assert_eq!(true, is_valid_name("var name with spaces"));
    assert_eq!(true, is_valid_name("var+plus-minus@at"));
    // non-ASCII characters are allowed anywhere
    assert_eq!(true, is_valid_name("café"));
    assert_eq!(true, is_valid_name("température"));
}

#[test]
fn test_invalid_names() {
    assert_eq!(false, is_valid_name(""));
    assert_eq!(false, is_valid_name(" leading_space"));
    assert_eq!(false, is_valid_name("!bang"));
    assert_eq!(false, is_valid_name("+plus_first"));
    assert_eq!(false, is_valid_name(".dot_first"));
    // control characters are neither alphanumeric nor special1/special2
    assert_eq!(false, is_valid_name("tab\tinside"));
}

#[test]
fn test_name_maximum_size() {
    let name_max: String = "a".repeat(NC_MAX_NAME_SIZE);
    assert_eq!(true, is_valid_name(&name_max));

    let name_too_long: String = "a".repeat(NC_MAX_NAME_SIZE + 1);
    assert_eq!(false, is_valid_name(&name_too_long));
}
