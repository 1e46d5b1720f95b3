#![cfg(test)]
use super::DataValues;
use crate::DataType;

#[test]
fn test_new_zero_filled() {
    assert_eq!(DataValues::Byte(vec![0; 3]), DataValues::new(DataType::Byte, 3));
    assert_eq!(DataValues::Char(vec![0; 3]), DataValues::new(DataType::Char, 3));
    assert_eq!(DataValues::Short(vec![0; 3]), DataValues::new(DataType::Short, 3));
    assert_eq!(DataValues::Int(vec![0; 3]), DataValues::new(DataType::Int, 3));
    assert_eq!(DataValues::Float(vec![0.0; 3]), DataValues::new(DataType::Float, 3));
    assert_eq!(DataValues::Double(vec![0.0; 3]), DataValues::new(DataType::Double, 3));
}

#[test]
fn test_data_type_and_len() {
    let values = DataValues::Short(vec![1_i16, 2, 3, 4]);
    assert_eq!(DataType::Short, values.data_type());
    assert_eq!(4, values.len());
    assert_eq!(false, values.is_empty());

    let values = DataValues::Double(vec![]);
    assert_eq!(DataType::Double, values.data_type());
    assert_eq!(0, values.len());
    assert_eq!(true, values.is_empty());
}

#[test]
fn test_typed_getters() {
    let values = DataValues::Int(vec![1_i32, 2, 3]);

    assert_eq!(None, values.get_byte());
    assert_eq!(None, values.get_char());
    assert_eq!(None, values.get_short());
    assert_eq!(Some(&[1_i32, 2, 3][..]), values.get_int());
    assert_eq!(None, values.get_float());
    assert_eq!(None, values.get_double());
}

#[test]
fn test_byte_and_char_are_distinct() {
    let bytes = DataValues::Byte(vec![b'a', b'b']);
    let chars = DataValues::Char(vec![b'a', b'b']);

    assert_ne!(bytes, chars);
    assert_eq!(DataType::Byte, bytes.data_type());
    assert_eq!(DataType::Char, chars.data_type());
    assert_eq!(Some(&[b'a', b'b'][..]), bytes.get_byte());
    assert_eq!(None, bytes.get_char());
    assert_eq!(Some(&[b'a', b'b'][..]), chars.get_char());
    assert_eq!(None, chars.get_byte());
}

#[test]
fn test_get_as_string() {
    let utf8_values = DataValues::Char("café".as_bytes().to_vec());
    assert_eq!(Some(String::from("café")), utf8_values.get_as_string());

    // latin-1 encoded octets are not valid UTF-8
    let latin1_values = DataValues::Char(vec![b'c', b'a', b'f', b'\xe9']);
    assert_eq!(None, latin1_values.get_as_string());

    let not_char = DataValues::Byte(vec![b'a']);
    assert_eq!(None, not_char.get_as_string());
}

#[test]
fn test_typed_extractors() {
    let data: Vec<f32> = vec![0.5, 1.5];
    let ptr_before: *const f32 = data.as_ptr();

    let values = DataValues::Float(data);
    let values: DataValues = values.into_int().unwrap_err();
    let values: DataValues = values.into_double().unwrap_err();

    let data: Vec<f32> = values.into_float().unwrap();
    let ptr_after: *const f32 = data.as_ptr();

    assert_eq!(vec![0.5, 1.5], data);
    // no copy of the buffer has been done
    assert_eq!(ptr_before, ptr_after);
}
