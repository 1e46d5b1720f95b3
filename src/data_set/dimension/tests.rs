#![cfg(test)]
use super::{Dimension, DimensionType};
use crate::{InvalidDataSet, NC_MAX_DIM_SIZE};

#[test]
fn test_new_fixed_size() {
    let dim: Dimension = Dimension::new_fixed_size("x", 10).unwrap();
    assert_eq!("x", dim.name());
    assert_eq!(10, dim.size());
    assert_eq!(DimensionType::FixedSize, dim.dim_type());
    assert_eq!(true, dim.is_fixed());
    assert_eq!(false, dim.is_unlimited());
}

#[test]
fn test_new_fixed_size_zero_size() {
    assert_eq!(
        InvalidDataSet::FixedDimensionWithZeroSize(String::from("x")),
        Dimension::new_fixed_size("x", 0).unwrap_err()
    );
}

#[test]
fn test_new_fixed_size_maximum_size() {
    assert_eq!(
        NC_MAX_DIM_SIZE,
        Dimension::new_fixed_size("x", NC_MAX_DIM_SIZE).unwrap().size()
    );
    assert_eq!(
        InvalidDataSet::MaximumFixedDimensionSizeExceeded {
            dim_name: String::from("x"),
            get: NC_MAX_DIM_SIZE + 1,
        },
        Dimension::new_fixed_size("x", NC_MAX_DIM_SIZE + 1).unwrap_err()
    );
}

#[test]
fn test_new_unlimited_size() {
    let dim: Dimension = Dimension::new_unlimited_size("time").unwrap();
    assert_eq!("time", dim.name());
    // the unlimited dimension is recorded with length 0
    assert_eq!(0, dim.size());
    assert_eq!(DimensionType::UnlimitedSize, dim.dim_type());
    assert_eq!(false, dim.is_fixed());
    assert_eq!(true, dim.is_unlimited());
}

#[test]
fn test_invalid_name() {
    assert_eq!(
        InvalidDataSet::DimensionNameNotValid(String::from("!invalid")),
        Dimension::new_fixed_size("!invalid", 10).unwrap_err()
    );
    assert_eq!(
        InvalidDataSet::DimensionNameNotValid(String::from("")),
        Dimension::new_unlimited_size("").unwrap_err()
    );
}

#[test]
fn test_demote_and_promote() {
    let dim: Dimension = Dimension::new_unlimited_size("time").unwrap();

    dim.demote(5).unwrap();
    assert_eq!(DimensionType::FixedSize, dim.dim_type());
    assert_eq!(5, dim.size());

    dim.promote();
    assert_eq!(DimensionType::UnlimitedSize, dim.dim_type());
    assert_eq!(0, dim.size());
}

#[test]
fn test_demote_requires_a_valid_fixed_size() {
    let dim: Dimension = Dimension::new_unlimited_size("time").unwrap();
    assert_eq!(
        InvalidDataSet::FixedDimensionWithZeroSize(String::from("time")),
        dim.demote(0).unwrap_err()
    );
    // the dimension is left unchanged
    assert_eq!(DimensionType::UnlimitedSize, dim.dim_type());
}
