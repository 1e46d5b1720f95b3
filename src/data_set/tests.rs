#![cfg(test)]
use std::rc::Rc;

use super::{DataSet, Dimension, DimensionType};
use crate::{DataType, DataValues, InvalidDataSet, Version};

#[test]
fn test_new_data_set() {
    let data_set = DataSet::new();
    assert_eq!(Version::Classic, data_set.version());
    assert_eq!(0, data_set.num_records());
    assert_eq!(0, data_set.num_dims());
    assert_eq!(0, data_set.num_global_attrs());
    assert_eq!(0, data_set.num_vars());
    assert_eq!(false, data_set.has_unlimited_dim());
}

#[test]
fn test_add_dim() {
    let mut data_set = DataSet::new();

    let x: Rc<Dimension> = data_set.add_dim("x", 10, 1).unwrap();
    assert_eq!(1, data_set.num_dims());
    assert_eq!(true, data_set.has_dim("x"));
    assert_eq!(Some(10), data_set.dim_size("x"));
    assert_eq!(Some(DimensionType::FixedSize), data_set.dim_type("x"));
    assert_eq!("x", x.name());

    // a second dimension with the same name is rejected
    assert_eq!(
        InvalidDataSet::DimensionAlreadyExists(String::from("x")),
        data_set.add_dim("x", 20, 1).unwrap_err()
    );

    // `length = 0` defines the record dimension
    let time: Rc<Dimension> = data_set.add_dim("time", 0, 1).unwrap();
    assert_eq!(true, data_set.has_unlimited_dim());
    assert_eq!(true, time.is_unlimited());
}

#[test]
fn test_add_dim_demotes_previous_record_dim() {
    let mut data_set = DataSet::new();

    let first: Rc<Dimension> = data_set.add_dim("first", 0, 7).unwrap();
    assert_eq!(true, first.is_unlimited());

    let second: Rc<Dimension> = data_set.add_dim("second", 0, 7).unwrap();
    assert_eq!(false, first.is_unlimited());
    assert_eq!(7, first.size());
    assert_eq!(true, second.is_unlimited());
    assert_eq!(true, Rc::ptr_eq(&second, &data_set.get_unlimited_dim().unwrap()));
}

#[test]
fn test_add_dim_demotion_requires_a_valid_default_length() {
    let mut data_set = DataSet::new();
    let first: Rc<Dimension> = data_set.add_dim("first", 0, 7).unwrap();

    // a zero default cannot produce a valid fixed dimension
    assert_eq!(
        InvalidDataSet::FixedDimensionWithZeroSize(String::from("first")),
        data_set.add_dim("second", 0, 0).unwrap_err()
    );
    // the data set is left unchanged
    assert_eq!(true, first.is_unlimited());
    assert_eq!(1, data_set.num_dims());
    assert_eq!(true, Rc::ptr_eq(&first, &data_set.get_unlimited_dim().unwrap()));
}

#[test]
fn test_set_unlimited() {
    let mut data_set = DataSet::new();
    let x: Rc<Dimension> = data_set.add_dim("x", 10, 1).unwrap();
    let time: Rc<Dimension> = data_set.add_dim("time", 0, 1).unwrap();

    data_set.set_unlimited(&x, 5).unwrap();
    assert_eq!(true, x.is_unlimited());
    assert_eq!(false, time.is_unlimited());
    assert_eq!(5, time.size());
    assert_eq!(true, Rc::ptr_eq(&x, &data_set.get_unlimited_dim().unwrap()));
}

#[test]
fn test_set_unlimited_foreign_handle() {
    let mut data_set = DataSet::new();
    data_set.add_dim("x", 10, 1).unwrap();

    let foreign: Rc<Dimension> = Rc::new(Dimension::new_fixed_size("x", 10).unwrap());
    assert_eq!(
        InvalidDataSet::DimensionNotDefined(String::from("x")),
        data_set.set_unlimited(&foreign, 1).unwrap_err()
    );
}

#[test]
fn test_set_unlimited_must_stay_first() {
    let mut data_set = DataSet::new();
    let x = data_set.add_dim("x", 10, 1).unwrap();
    let y = data_set.add_dim("y", 2, 1).unwrap();
    data_set.add_var("v", DataType::Int).unwrap();
    data_set.redim_var("v", &[x, y.clone()]).unwrap();

    // `y` is used in a non-first position, it cannot become the record dimension
    assert_eq!(
        InvalidDataSet::UnlimitedDimensionMustBeDefinedFirst {
            var_name: String::from("v"),
            unlim_dim_name: String::from("y"),
            get_dim_names: vec![String::from("x"), String::from("y")],
        },
        data_set.set_unlimited(&y, 1).unwrap_err()
    );
}

#[test]
fn test_set_unlimited_drops_stale_data() {
    let mut data_set = DataSet::new();
    let x = data_set.add_dim("x", 2, 1).unwrap();
    data_set.add_var("v", DataType::Int).unwrap();
    data_set.redim_var("v", &[x.clone()]).unwrap();
    data_set.set_var_data_int("v", vec![1, 2]).unwrap();
    assert_eq!(true, data_set.var_data("v").is_some());

    data_set.set_num_records(2);
    data_set.set_unlimited(&x, 1).unwrap();
    // the variable became a record variable, its expected length changed
    assert_eq!(None, data_set.var_data("v"));
}

#[test]
fn test_remove_dim() {
    let mut data_set = DataSet::new();
    let time = data_set.add_dim("time", 0, 1).unwrap();
    data_set.add_dim("x", 2, 1).unwrap();
    data_set.add_var("v", DataType::Int).unwrap();
    data_set.redim_var("v", &[time]).unwrap();

    // a dimension still used by a variable cannot be removed
    assert_eq!(
        InvalidDataSet::DimensionYetUsed {
            var_names: vec![String::from("v")],
            dim_name: String::from("time"),
        },
        data_set.remove_dim("time").unwrap_err()
    );

    data_set.remove_var("v").unwrap();
    let removed = data_set.remove_dim("time").unwrap();
    assert_eq!("time", removed.name());
    // removing the record dimension clears the unlimited marker
    assert_eq!(false, data_set.has_unlimited_dim());
    assert_eq!(1, data_set.num_dims());

    assert_eq!(
        InvalidDataSet::DimensionNotDefined(String::from("not_defined")),
        data_set.remove_dim("not_defined").unwrap_err()
    );
}

#[test]
fn test_rename_dim() {
    let mut data_set = DataSet::new();
    let x = data_set.add_dim("x", 2, 1).unwrap();

    data_set.rename_dim("x", "y").unwrap();
    assert_eq!(false, data_set.has_dim("x"));
    assert_eq!(true, data_set.has_dim("y"));
    // the handle follows the rename
    assert_eq!("y", x.name());

    assert_eq!(
        InvalidDataSet::DimensionNameNotValid(String::from("!invalid")),
        data_set.rename_dim("y", "!invalid").unwrap_err()
    );
}

#[test]
fn test_get_dim_at() {
    let mut data_set = DataSet::new();
    let x = data_set.add_dim("x", 2, 1).unwrap();
    let y = data_set.add_dim("y", 3, 1).unwrap();

    assert_eq!(true, Rc::ptr_eq(&x, &data_set.get_dim_at(0).unwrap()));
    assert_eq!(true, Rc::ptr_eq(&y, &data_set.get_dim_at(1).unwrap()));
    assert_eq!(true, data_set.get_dim_at(2).is_none());
}

#[test]
fn test_dim_size_of_the_record_dim_is_the_record_count() {
    let mut data_set = DataSet::new();
    data_set.add_dim("time", 0, 1).unwrap();
    data_set.set_num_records(12);

    assert_eq!(Some(12), data_set.dim_size("time"));
}

#[test]
fn test_add_var_and_redim_var() {
    let mut data_set = DataSet::new();
    let x = data_set.add_dim("x", 3, 1).unwrap();

    data_set.add_var("v", DataType::Int).unwrap();
    assert_eq!(1, data_set.num_vars());
    assert_eq!(Some(1), data_set.var_len("v")); // scalar
    assert_eq!(Some(DataType::Int), data_set.var_data_type("v"));

    assert_eq!(
        InvalidDataSet::VariableAlreadyExists(String::from("v")),
        data_set.add_var("v", DataType::Int).unwrap_err()
    );

    data_set.redim_var("v", &[x]).unwrap();
    assert_eq!(Some(3), data_set.var_len("v"));

    // a foreign handle is rejected
    let foreign: Rc<Dimension> = Rc::new(Dimension::new_fixed_size("z", 2).unwrap());
    assert_eq!(
        InvalidDataSet::DimensionNotDefined(String::from("z")),
        data_set.redim_var("v", &[foreign]).unwrap_err()
    );
}

#[test]
fn test_redim_var_drops_stale_data() {
    let mut data_set = DataSet::new();
    let x = data_set.add_dim("x", 2, 1).unwrap();
    let y = data_set.add_dim("y", 3, 1).unwrap();
    data_set.add_var("v", DataType::Short).unwrap();
    data_set.redim_var("v", &[x.clone()]).unwrap();
    data_set.set_var_data_short("v", vec![1, 2]).unwrap();
    assert_eq!(true, data_set.var_data("v").is_some());

    data_set.redim_var("v", &[x, y]).unwrap();
    assert_eq!(None, data_set.var_data("v"));
}

#[test]
fn test_set_var_data() {
    let mut data_set = DataSet::new();
    let x = data_set.add_dim("x", 3, 1).unwrap();
    data_set.add_var("v", DataType::Int).unwrap();
    data_set.redim_var("v", &[x]).unwrap();

    // a type mismatch is rejected
    assert_eq!(
        InvalidDataSet::VariableMismatchDataType {
            var_name: String::from("v"),
            req: DataType::Int,
            get: DataType::Float,
        },
        data_set.set_var_data("v", DataValues::Float(vec![0.0; 3])).unwrap_err()
    );
    // a length mismatch is rejected
    assert_eq!(
        InvalidDataSet::VariableMismatchDataLength {
            var_name: String::from("v"),
            req: 3,
            get: 2,
        },
        data_set.set_var_data_int("v", vec![1, 2]).unwrap_err()
    );

    data_set.set_var_data_int("v", vec![1, 2, 3]).unwrap();
    assert_eq!(Some(&DataValues::Int(vec![1, 2, 3])), data_set.var_data("v"));
}

#[test]
fn test_set_var_data_record_var() {
    let mut data_set = DataSet::new();
    let time = data_set.add_dim("time", 0, 1).unwrap();
    let x = data_set.add_dim("x", 2, 1).unwrap();
    data_set.add_var("v", DataType::Int).unwrap();
    data_set.redim_var("v", &[time, x]).unwrap();
    data_set.set_num_records(2);

    // the expected length is `num_records * chunk_len`
    assert_eq!(
        InvalidDataSet::VariableMismatchDataLength {
            var_name: String::from("v"),
            req: 4,
            get: 2,
        },
        data_set.set_var_data_int("v", vec![10, 20]).unwrap_err()
    );
    data_set.set_var_data_int("v", vec![10, 20, 30, 40]).unwrap();
    assert_eq!(Some(4), data_set.var_len("v"));
}

#[test]
fn test_rename_and_remove_var() {
    let mut data_set = DataSet::new();
    data_set.add_var("v_1", DataType::Int).unwrap();
    data_set.add_var("v_2", DataType::Int).unwrap();

    assert_eq!(
        InvalidDataSet::VariableAlreadyExists(String::from("v_2")),
        data_set.rename_var("v_1", "v_2").unwrap_err()
    );
    data_set.rename_var("v_1", "v_3").unwrap();
    assert_eq!(false, data_set.has_var("v_1"));
    assert_eq!(true, data_set.has_var("v_3"));

    let removed = data_set.remove_var("v_3").unwrap();
    assert_eq!("v_3", removed.name());
    assert_eq!(1, data_set.num_vars());
}

#[test]
fn test_global_attrs() {
    let mut data_set = DataSet::new();
    data_set.add_global_attr_string("title", "example").unwrap();
    data_set.add_global_attr_short("levels", vec![1_i16, 2]).unwrap();

    assert_eq!(2, data_set.num_global_attrs());
    assert_eq!(true, data_set.has_global_attr("title"));
    assert_eq!(Some(String::from("example")), data_set.get_global_attr_as_string("title"));
    assert_eq!(Some(&[1_i16, 2][..]), data_set.get_global_attr_short("levels"));
    assert_eq!(Some(DataType::Char), data_set.get_global_attr_data_type("title"));
    assert_eq!(Some(7), data_set.get_global_attr_len("title"));

    assert_eq!(
        InvalidDataSet::GlobalAttributeAlreadyExists(String::from("title")),
        data_set.add_global_attr_string("title", "again").unwrap_err()
    );

    data_set.rename_global_attr("title", "long_title").unwrap();
    assert_eq!(false, data_set.has_global_attr("title"));
    assert_eq!(true, data_set.has_global_attr("long_title"));

    data_set.remove_global_attr("long_title").unwrap();
    assert_eq!(1, data_set.num_global_attrs());
    assert_eq!(
        InvalidDataSet::GlobalAttributeNotDefined(String::from("long_title")),
        data_set.remove_global_attr("long_title").unwrap_err()
    );
}

#[test]
fn test_var_attrs_through_the_data_set() {
    let mut data_set = DataSet::new();
    data_set.add_var("v", DataType::Float).unwrap();

    data_set.add_var_attr_string("v", "units", "m").unwrap();
    data_set.add_var_attr_double("v", "valid_range", vec![0.0, 100.0]).unwrap();

    assert_eq!(Some(2), data_set.num_var_attrs("v"));
    assert_eq!(Some(true), data_set.has_var_attr("v", "units"));
    assert_eq!(Some(String::from("m")), data_set.get_var_attr_as_string("v", "units"));
    assert_eq!(Some(&[0.0_f64, 100.0][..]), data_set.get_var_attr_double("v", "valid_range"));
    assert_eq!(Some(DataType::Double), data_set.get_var_attr_data_type("v", "valid_range"));
    assert_eq!(Some(2), data_set.get_var_attr_len("v", "valid_range"));

    data_set.rename_var_attr("v", "units", "unit").unwrap();
    assert_eq!(Some(false), data_set.has_var_attr("v", "units"));
    data_set.remove_var_attr("v", "unit").unwrap();
    assert_eq!(Some(1), data_set.num_var_attrs("v"));

    // an undefined variable yields `None`
    assert_eq!(None, data_set.num_var_attrs("undefined"));
}

#[test]
fn test_record_size() {
    let mut data_set = DataSet::new();
    assert_eq!(None, data_set.record_size());

    let time = data_set.add_dim("time", 0, 1).unwrap();
    assert_eq!(Some(0), data_set.record_size());

    data_set.add_var("var_byte", DataType::Byte).unwrap();
    data_set.redim_var("var_byte", &[time.clone()]).unwrap();
    // 1 useful byte + 3 zero-padding bytes
    assert_eq!(Some(4), data_set.record_size());

    data_set.add_var("var_double", DataType::Double).unwrap();
    data_set.redim_var("var_double", &[time]).unwrap();
    assert_eq!(Some(12), data_set.record_size());
}

#[test]
fn test_get_dims_from_dim_ids() {
    let mut data_set = DataSet::new();
    let x = data_set.add_dim("x", 2, 1).unwrap();
    let y = data_set.add_dim("y", 3, 1).unwrap();

    let dims = data_set.get_dims_from_dim_ids(&[1, 0]).unwrap();
    assert_eq!(true, Rc::ptr_eq(&y, &dims[0]));
    assert_eq!(true, Rc::ptr_eq(&x, &dims[1]));

    assert_eq!(
        InvalidDataSet::DimensionIdsNotFound {
            searched: vec![0, 2],
            not_found: vec![2],
        },
        data_set.get_dims_from_dim_ids(&[0, 2]).unwrap_err()
    );
}
