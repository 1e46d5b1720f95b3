#![cfg(test)]
use super::DataSetLayout;
use crate::error::WriteError;
use crate::io::Offset;
use crate::size;
use crate::{DataSet, DataType, Version};

#[test]
fn test_plan_empty_data_set() {
    let data_set = DataSet::new();
    let layout = DataSetLayout::plan(&data_set, 0).unwrap();

    assert_eq!(32, layout.header_size);
    assert_eq!(0, layout.header_zero_padding_size);
    assert_eq!(0, layout.record_stride);
    assert_eq!(true, layout.vars.is_empty());
}

#[test]
fn test_plan_partitions_fixed_variables_first() {
    let mut data_set = DataSet::new();
    let time = data_set.add_dim("time", 0, 1).unwrap();
    let x = data_set.add_dim("x", 2, 1).unwrap();

    // declared interleaved on purpose
    data_set.add_var("rec_1", DataType::Int).unwrap();
    data_set.redim_var("rec_1", &[time.clone(), x.clone()]).unwrap();
    data_set.add_var("fix_1", DataType::Int).unwrap();
    data_set.redim_var("fix_1", &[x.clone()]).unwrap();
    data_set.add_var("rec_2", DataType::Double).unwrap();
    data_set.redim_var("rec_2", &[time]).unwrap();
    data_set.add_var("fix_2", DataType::Short).unwrap();
    data_set.redim_var("fix_2", &[x]).unwrap();

    let layout = DataSetLayout::plan(&data_set, 0).unwrap();
    let ordered_names: Vec<&str> = layout.vars.iter().map(|(var, _)| var.name()).collect();
    assert_eq!(vec!["fix_1", "fix_2", "rec_1", "rec_2"], ordered_names);

    // the offsets are contiguous from the end of the header
    let header_size: usize = layout.header_size;
    assert_eq!(size::header_size(&data_set), header_size);
    let begins: Vec<i64> = layout
        .vars
        .iter()
        .map(|(_, var_layout)| i64::from(var_layout.begin_offset.clone()))
        .collect();
    assert_eq!(header_size as i64, begins[0]);
    assert_eq!(begins[0] + 8, begins[1]); // fix_1: 2 i32 elements
    assert_eq!(begins[1] + 4, begins[2]); // fix_2: 2 i16 elements + 0 padding
    assert_eq!(begins[2] + 8, begins[3]); // rec_1: one record of 2 i32 elements

    // per-record stride: rec_1 (8 bytes) + rec_2 (8 bytes)
    assert_eq!(16, layout.record_stride);
}

#[test]
fn test_plan_chunk_sizes_are_padded() {
    let mut data_set = DataSet::new();
    let x = data_set.add_dim("x", 3, 1).unwrap();
    data_set.add_var("var_byte", DataType::Byte).unwrap();
    data_set.redim_var("var_byte", &[x.clone()]).unwrap();
    data_set.add_var("var_short", DataType::Short).unwrap();
    data_set.redim_var("var_short", &[x]).unwrap();

    let layout = DataSetLayout::plan(&data_set, 0).unwrap();
    assert_eq!(4, layout.vars[0].1.chunk_size); // 3 useful bytes + 1 padding byte
    assert_eq!(8, layout.vars[1].1.chunk_size); // 6 useful bytes + 2 padding bytes
}

#[test]
fn test_plan_header_min_size_reserves_zero_padding() {
    let mut data_set = DataSet::new();
    data_set.add_var("v", DataType::Double).unwrap();

    let required: usize = size::header_size(&data_set);
    let layout = DataSetLayout::plan(&data_set, 1024).unwrap();

    assert_eq!(1024, layout.header_size);
    assert_eq!(1024 - required, layout.header_zero_padding_size);
    assert_eq!(Offset::I32(1024), layout.vars[0].1.begin_offset);
}

#[test]
fn test_plan_classic_offset_overflow() {
    const BIG_DIM_SIZE: usize = 1 << 30;

    let mut data_set = DataSet::new();
    let big = data_set.add_dim("big", BIG_DIM_SIZE, 1).unwrap();
    for var_name in &["var_1", "var_2", "var_3"] {
        data_set.add_var(var_name, DataType::Byte).unwrap();
        data_set.redim_var(var_name, &[big.clone()]).unwrap();
    }

    // the third begin offset exceeds 2^31 - 1 under the classic version
    match DataSetLayout::plan(&data_set, 0).unwrap_err() {
        WriteError::ClassicOffsetOverflow { begin_offset } => {
            assert!(begin_offset > (std::i32::MAX as u64));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // the 64-bit offset version accepts the same data set
    data_set.set_version(Version::Offset64Bit);
    let layout = DataSetLayout::plan(&data_set, 0).unwrap();
    let last_begin: i64 = i64::from(layout.vars[2].1.begin_offset.clone());
    assert!(last_begin > (std::i32::MAX as i64));
}

#[test]
fn test_plan_dim_ids() {
    let mut data_set = DataSet::new();
    let time = data_set.add_dim("time", 0, 1).unwrap();
    let x = data_set.add_dim("x", 2, 1).unwrap();
    let y = data_set.add_dim("y", 4, 1).unwrap();

    data_set.add_var("v", DataType::Float).unwrap();
    data_set.redim_var("v", &[time, y, x]).unwrap();

    let layout = DataSetLayout::plan(&data_set, 0).unwrap();
    assert_eq!(vec![0, 2, 1], layout.vars[0].1.dim_ids);
}
