#![cfg(test)]
use super::Attribute;
use crate::{DataType, DataValues};

#[test]
fn test_new_typed_attributes() {
    let attr: Attribute = Attribute::new_byte("attr_byte", vec![1_u8, 2, 3]).unwrap();
    assert_eq!("attr_byte", attr.name());
    assert_eq!(DataType::Byte, attr.data_type());
    assert_eq!(3, attr.len());
    assert_eq!(Some(&[1_u8, 2, 3][..]), attr.get_byte());
    assert_eq!(None, attr.get_char());
    assert_eq!(None, attr.get_short());
    assert_eq!(None, attr.get_int());
    assert_eq!(None, attr.get_float());
    assert_eq!(None, attr.get_double());

    let attr: Attribute = Attribute::new_short("attr_short", vec![1_i16, 2]).unwrap();
    assert_eq!(DataType::Short, attr.data_type());
    assert_eq!(Some(&[1_i16, 2][..]), attr.get_short());

    let attr: Attribute = Attribute::new_int("attr_int", vec![1_i32]).unwrap();
    assert_eq!(DataType::Int, attr.data_type());
    assert_eq!(Some(&[1_i32][..]), attr.get_int());

    let attr: Attribute = Attribute::new_float("attr_float", vec![0.5_f32]).unwrap();
    assert_eq!(DataType::Float, attr.data_type());
    assert_eq!(Some(&[0.5_f32][..]), attr.get_float());

    let attr: Attribute = Attribute::new_double("attr_double", vec![0.5_f64]).unwrap();
    assert_eq!(DataType::Double, attr.data_type());
    assert_eq!(Some(&[0.5_f64][..]), attr.get_double());
}

#[test]
fn test_char_attribute() {
    let attr: Attribute = Attribute::new_char("units", b"m".to_vec()).unwrap();
    assert_eq!(DataType::Char, attr.data_type());
    // the element count of a `Char` attribute is its byte length
    assert_eq!(1, attr.len());
    assert_eq!(Some(&b"m"[..]), attr.get_char());
    assert_eq!(Some(String::from("m")), attr.get_as_string());
    assert_eq!(None, attr.get_byte());
}

#[test]
fn test_new_invalid_name() {
    assert_eq!(
        String::from("!invalid"),
        Attribute::new_char("!invalid", b"m".to_vec()).unwrap_err()
    );
    assert_eq!(
        String::from(""),
        Attribute::new("", DataValues::Int(vec![1])).unwrap_err()
    );
}

#[test]
fn test_values_accessor() {
    let attr: Attribute = Attribute::new_int("attr_int", vec![1_i32, 2]).unwrap();
    assert_eq!(&DataValues::Int(vec![1_i32, 2]), attr.values());
}
