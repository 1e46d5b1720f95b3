#![cfg(test)]
use super::*;
use crate::{DataSet, DataType};

#[test]
fn test_name_string_size() {
    // 4-byte length prefix plus the name bytes padded to a multiple of 4
    assert_eq!(4 + 4, name_string_size("x"));
    assert_eq!(4 + 4, name_string_size("abcd"));
    assert_eq!(4 + 8, name_string_size("abcde"));
    assert_eq!(4 + 8, name_string_size("units"));
}

#[test]
fn test_values_size() {
    use crate::DataValues;

    assert_eq!(4, values_size(&DataValues::Byte(vec![0; 3])));
    assert_eq!(4, values_size(&DataValues::Char(b"m".to_vec())));
    assert_eq!(4, values_size(&DataValues::Short(vec![0; 2])));
    assert_eq!(8, values_size(&DataValues::Short(vec![0; 3])));
    assert_eq!(12, values_size(&DataValues::Int(vec![0; 3])));
    assert_eq!(8, values_size(&DataValues::Float(vec![0.0; 2])));
    assert_eq!(16, values_size(&DataValues::Double(vec![0.0; 2])));
}

#[test]
fn test_attr_size() {
    let mut data_set = DataSet::new();
    data_set.add_global_attr_string("units", "m").unwrap();
    // name (4 + 8) + type (4) + nelems (4) + padded text (4)
    assert_eq!(24, attr_size(data_set.get_global_attr("units").unwrap()));
}

#[test]
fn test_header_size_empty_data_set() {
    // magic + numrecs + three ABSENT list prefixes
    let data_set = DataSet::new();
    assert_eq!(32, header_size(&data_set));
}

#[test]
fn test_header_size_one_dim() {
    let mut data_set = DataSet::new();
    data_set.add_fixed_dim("x", 3).unwrap();
    // magic (4) + numrecs (4) + dim list (8 + 12) + 2 ABSENT prefixes (8 + 8)
    assert_eq!(44, header_size(&data_set));
}

#[test]
fn test_var_header_size_depends_on_version() {
    use crate::Version;

    let mut data_set = DataSet::new();
    data_set.add_var("v", DataType::Double).unwrap();
    let var = data_set.get_var("v").unwrap();

    // name (4 + 4) + ndims (4) + no dim ids + ABSENT attrs (8) + type (4) + vsize (4) + begin
    assert_eq!(32, var_header_size(var, &Version::Classic));
    assert_eq!(36, var_header_size(var, &Version::Offset64Bit));
}

#[test]
fn test_header_size_scalar_var() {
    let mut data_set = DataSet::new();
    data_set.add_var("v", DataType::Double).unwrap();
    // magic (4) + numrecs (4) + 2 ABSENT prefixes (8 + 8) + var list (8 + 32)
    assert_eq!(64, header_size(&data_set));
}
