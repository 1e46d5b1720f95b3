#![cfg(test)]
use std::rc::Rc;

use super::Variable;
use crate::data_set::Dimension;
use crate::{DataType, InvalidDataSet, NC_MAX_VAR_DIMS};

fn fixed_dim(name: &str, size: usize) -> Rc<Dimension> {
    Rc::new(Dimension::new_fixed_size(name, size).unwrap())
}

fn unlimited_dim(name: &str) -> Rc<Dimension> {
    Rc::new(Dimension::new_unlimited_size(name).unwrap())
}

#[test]
fn test_new_scalar_var() {
    let var: Variable = Variable::new("v", vec![], DataType::Double).unwrap();
    assert_eq!("v", var.name());
    assert_eq!(DataType::Double, var.data_type());
    assert_eq!(0, var.num_dims());
    assert_eq!(false, var.is_record_var());
    assert_eq!(1, var.chunk_len());
    assert_eq!(8, var.chunk_size());
    assert_eq!(None, var.data());
}

#[test]
fn test_new_invalid_name() {
    assert_eq!(
        InvalidDataSet::VariableNameNotValid(String::from("!invalid")),
        Variable::new("!invalid", vec![], DataType::Int).unwrap_err()
    );
}

#[test]
fn test_is_record_var() {
    let time = unlimited_dim("time");
    let x = fixed_dim("x", 3);

    let fixed_var: Variable = Variable::new("fixed", vec![Rc::clone(&x)], DataType::Int).unwrap();
    assert_eq!(false, fixed_var.is_record_var());

    let record_var: Variable = Variable::new("rec", vec![time, x], DataType::Int).unwrap();
    assert_eq!(true, record_var.is_record_var());
}

#[test]
fn test_chunk_len_and_chunk_size() {
    let time = unlimited_dim("time");
    let x = fixed_dim("x", 3);
    let y = fixed_dim("y", 5);

    // the record axis is left out of the chunk product
    let var: Variable = Variable::new("rec", vec![time.clone(), x.clone(), y.clone()], DataType::Short).unwrap();
    assert_eq!(15, var.chunk_len());
    assert_eq!(32, var.chunk_size()); // 30 useful bytes + 2 padding bytes

    let var: Variable = Variable::new("fix", vec![x, y], DataType::Byte).unwrap();
    assert_eq!(15, var.chunk_len());
    assert_eq!(16, var.chunk_size()); // 15 useful bytes + 1 padding byte

    // a record variable with no other dimension has one element per record
    let var: Variable = Variable::new("rec_scalar", vec![time], DataType::Int).unwrap();
    assert_eq!(1, var.chunk_len());
    assert_eq!(4, var.chunk_size());
}

#[test]
fn test_unlimited_dim_must_be_first() {
    let time = unlimited_dim("time");
    let x = fixed_dim("x", 3);

    assert_eq!(
        InvalidDataSet::UnlimitedDimensionMustBeDefinedFirst {
            var_name: String::from("v"),
            unlim_dim_name: String::from("time"),
            get_dim_names: vec![String::from("x"), String::from("time")],
        },
        Variable::new("v", vec![x, time], DataType::Int).unwrap_err()
    );
}

#[test]
fn test_repeated_dims_are_rejected() {
    let x = fixed_dim("x", 3);

    assert_eq!(
        InvalidDataSet::DimensionsUsedMultipleTimes {
            var_name: String::from("v"),
            get_dim_names: vec![String::from("x"), String::from("x")],
        },
        Variable::new("v", vec![Rc::clone(&x), x], DataType::Int).unwrap_err()
    );
}

#[test]
fn test_maximum_number_of_dims() {
    let dims: Vec<Rc<Dimension>> = (0..(NC_MAX_VAR_DIMS + 1))
        .map(|i| fixed_dim(&format!("dim_{:0>4}", i), 1))
        .collect();

    assert_eq!(
        InvalidDataSet::MaximumDimensionsPerVariableExceeded {
            var_name: String::from("v"),
            num_dims: NC_MAX_VAR_DIMS + 1,
        },
        Variable::new("v", dims, DataType::Int).unwrap_err()
    );
}

#[test]
fn test_attrs() {
    let mut var: Variable = Variable::new("v", vec![], DataType::Int).unwrap();
    assert_eq!(0, var.num_attrs());
    assert_eq!(false, var.has_attr("units"));

    var.add_attr_string("units", "m").unwrap();
    var.add_attr_float("scale_factor", vec![0.5]).unwrap();

    assert_eq!(2, var.num_attrs());
    assert_eq!(true, var.has_attr("units"));
    assert_eq!(vec!["units", "scale_factor"], var.get_attr_names());
    assert_eq!(Some(String::from("m")), var.get_attr_as_string("units"));
    assert_eq!(Some(&[0.5_f32][..]), var.get_attr_float("scale_factor"));

    // a second attribute with the same name is rejected
    assert_eq!(
        InvalidDataSet::VariableAttributeAlreadyExists {
            var_name: String::from("v"),
            attr_name: String::from("units"),
        },
        var.add_attr_string("units", "Celsius").unwrap_err()
    );

    // rename then remove
    var.rename_attr("units", "unit").unwrap();
    assert_eq!(false, var.has_attr("units"));
    assert_eq!(true, var.has_attr("unit"));
    let removed = var.remove_attr("unit").unwrap();
    assert_eq!("unit", removed.name());
    assert_eq!(1, var.num_attrs());
}

#[test]
fn test_use_dim_and_dim_names() {
    let x = fixed_dim("x", 3);
    let y = fixed_dim("y", 2);
    let var: Variable = Variable::new("v", vec![x, y], DataType::Float).unwrap();

    assert_eq!(vec!["x", "y"], var.dim_names());
    assert_eq!(true, var.use_dim("x"));
    assert_eq!(true, var.use_dim("y"));
    assert_eq!(false, var.use_dim("z"));
}
