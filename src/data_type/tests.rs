#![cfg(test)]
use std::convert::TryFrom;

use super::DataType;

#[test]
fn test_data_type_try_from_u32() {
    assert_eq!(
        Err("Invalid value for a NetCDF-3 data type."),
        DataType::try_from(0_u32)
    );
    assert_eq!(Ok(DataType::Byte), DataType::try_from(1_u32));
    assert_eq!(Ok(DataType::Char), DataType::try_from(2_u32));
    assert_eq!(Ok(DataType::Short), DataType::try_from(3_u32));
    assert_eq!(Ok(DataType::Int), DataType::try_from(4_u32));
    assert_eq!(Ok(DataType::Float), DataType::try_from(5_u32));
    assert_eq!(Ok(DataType::Double), DataType::try_from(6_u32));
    assert_eq!(
        Err("Invalid value for a NetCDF-3 data type."),
        DataType::try_from(7_u32)
    );
    // the container tags are not value types
    assert_eq!(
        Err("Invalid value for a NetCDF-3 data type."),
        DataType::try_from(0x0A_u32)
    );
    assert_eq!(
        Err("Invalid value for a NetCDF-3 data type."),
        DataType::try_from(0x0B_u32)
    );
    assert_eq!(
        Err("Invalid value for a NetCDF-3 data type."),
        DataType::try_from(0x0C_u32)
    );
}

#[test]
fn test_data_type_size_of() {
    assert_eq!(1, DataType::Byte.size_of());
    assert_eq!(1, DataType::Char.size_of());
    assert_eq!(2, DataType::Short.size_of());
    assert_eq!(4, DataType::Int.size_of());
    assert_eq!(4, DataType::Float.size_of());
    assert_eq!(8, DataType::Double.size_of());
}

#[test]
fn test_data_type_display() {
    assert_eq!("DataType::Byte", format!("{}", DataType::Byte));
    assert_eq!("DataType::Double", format!("{}", DataType::Double));
}
