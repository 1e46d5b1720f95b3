#![cfg(test)]
use std::path::PathBuf;

use tempdir::TempDir;

use super::FileWriter;
use crate::error::WriteError;
use crate::{DataSet, DataType, FileReader, Version};

const TMP_DIR_PREFIX: &str = "nc3_tests_";

fn write_to_vec(data_set: &DataSet, header_min_size: usize) -> Vec<u8> {
    let mut writer: FileWriter<Vec<u8>> = FileWriter::new(Vec::new());
    writer.write_data_set(data_set, header_min_size).unwrap();
    writer.into_inner()
}

#[test]
fn test_write_empty_data_set() {
    let data_set = DataSet::new();
    let bytes: Vec<u8> = write_to_vec(&data_set, 0);

    #[rustfmt::skip]
    let expected_bytes: [u8; 32] = [
        0x43, 0x44, 0x46, 0x01,             // magic word and version
        0x00, 0x00, 0x00, 0x00,             // numrecs = 0
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT dimension list
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT global attribute list
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT variable list
    ];
    assert_eq!(&expected_bytes[..], &bytes[..]);
}

#[test]
fn test_write_one_dim() {
    let mut data_set = DataSet::new();
    data_set.add_fixed_dim("x", 3).unwrap();

    let bytes: Vec<u8> = write_to_vec(&data_set, 0);

    #[rustfmt::skip]
    let expected_bytes: [u8; 44] = [
        0x43, 0x44, 0x46, 0x01,             // magic word and version
        0x00, 0x00, 0x00, 0x00,             // numrecs = 0
        0x00, 0x00, 0x00, 0x0A,             // DIMENSION tag
        0x00, 0x00, 0x00, 0x01,             // 1 dimension
        0x00, 0x00, 0x00, 0x01,             // name length = 1
        0x78, 0x00, 0x00, 0x00,             // "x" and 3 padding bytes
        0x00, 0x00, 0x00, 0x03,             // dimension length = 3
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT global attribute list
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT variable list
    ];
    assert_eq!(&expected_bytes[..], &bytes[..]);
}

#[test]
fn test_write_global_char_attr() {
    let mut data_set = DataSet::new();
    data_set.add_global_attr_string("units", "m").unwrap();

    let bytes: Vec<u8> = write_to_vec(&data_set, 0);

    #[rustfmt::skip]
    let expected_bytes: [u8; 56] = [
        0x43, 0x44, 0x46, 0x01,             // magic word and version
        0x00, 0x00, 0x00, 0x00,             // numrecs = 0
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT dimension list
        0x00, 0x00, 0x00, 0x0C,             // ATTRIBUTE tag
        0x00, 0x00, 0x00, 0x01,             // 1 attribute
        0x00, 0x00, 0x00, 0x05,             // name length = 5
        0x75, 0x6E, 0x69, 0x74, 0x73, 0x00, 0x00, 0x00, // "units" and 3 padding bytes
        0x00, 0x00, 0x00, 0x02,             // type = NC_CHAR
        0x00, 0x00, 0x00, 0x01,             // nelems = 1
        0x6D, 0x00, 0x00, 0x00,             // "m" and 3 padding bytes
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT variable list
    ];
    assert_eq!(&expected_bytes[..], &bytes[..]);
}

#[test]
fn test_write_scalar_double_var() {
    let mut data_set = DataSet::new();
    data_set.add_var("v", DataType::Double).unwrap();
    data_set.set_var_data_double("v", vec![1.0]).unwrap();

    let bytes: Vec<u8> = write_to_vec(&data_set, 0);

    #[rustfmt::skip]
    let expected_bytes: [u8; 72] = [
        0x43, 0x44, 0x46, 0x01,             // magic word and version
        0x00, 0x00, 0x00, 0x00,             // numrecs = 0
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT dimension list
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT global attribute list
        0x00, 0x00, 0x00, 0x0B,             // VARIABLE tag
        0x00, 0x00, 0x00, 0x01,             // 1 variable
        0x00, 0x00, 0x00, 0x01,             // name length = 1
        0x76, 0x00, 0x00, 0x00,             // "v" and 3 padding bytes
        0x00, 0x00, 0x00, 0x00,             // ndims = 0
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT variable attribute list
        0x00, 0x00, 0x00, 0x06,             // type = NC_DOUBLE
        0x00, 0x00, 0x00, 0x08,             // vsize = 8
        0x00, 0x00, 0x00, 0x40,             // begin = 64 (the header size)
        0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 1.0 (IEEE-754 double)
    ];
    assert_eq!(&expected_bytes[..], &bytes[..]);
}

#[test]
fn test_write_record_var() {
    let mut data_set = DataSet::new();
    let time = data_set.add_dim("time", 0, 1).unwrap();
    let x = data_set.add_dim("x", 2, 1).unwrap();
    data_set.set_num_records(2);
    data_set.add_var("r", DataType::Int).unwrap();
    data_set.redim_var("r", &[time, x]).unwrap();
    data_set.set_var_data_int("r", vec![10, 20, 30, 40]).unwrap();

    let bytes: Vec<u8> = write_to_vec(&data_set, 0);

    #[rustfmt::skip]
    let expected_bytes: [u8; 112] = [
        0x43, 0x44, 0x46, 0x01,             // magic word and version
        0x00, 0x00, 0x00, 0x02,             // numrecs = 2
        0x00, 0x00, 0x00, 0x0A,             // DIMENSION tag
        0x00, 0x00, 0x00, 0x02,             // 2 dimensions
        0x00, 0x00, 0x00, 0x04,             // name length = 4
        0x74, 0x69, 0x6D, 0x65,             // "time"
        0x00, 0x00, 0x00, 0x00,             // the record dimension is recorded as 0
        0x00, 0x00, 0x00, 0x01,             // name length = 1
        0x78, 0x00, 0x00, 0x00,             // "x" and 3 padding bytes
        0x00, 0x00, 0x00, 0x02,             // dimension length = 2
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT global attribute list
        0x00, 0x00, 0x00, 0x0B,             // VARIABLE tag
        0x00, 0x00, 0x00, 0x01,             // 1 variable
        0x00, 0x00, 0x00, 0x01,             // name length = 1
        0x72, 0x00, 0x00, 0x00,             // "r" and 3 padding bytes
        0x00, 0x00, 0x00, 0x02,             // ndims = 2
        0x00, 0x00, 0x00, 0x00,             // dim id 0 ("time")
        0x00, 0x00, 0x00, 0x01,             // dim id 1 ("x")
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT variable attribute list
        0x00, 0x00, 0x00, 0x04,             // type = NC_INT
        0x00, 0x00, 0x00, 0x08,             // vsize = 8
        0x00, 0x00, 0x00, 0x60,             // begin = 96 (the header size)
        0x00, 0x00, 0x00, 0x0A,             // record 0 : 10, 20
        0x00, 0x00, 0x00, 0x14,
        0x00, 0x00, 0x00, 0x1E,             // record 1 : 30, 40
        0x00, 0x00, 0x00, 0x28,
    ];
    assert_eq!(&expected_bytes[..], &bytes[..]);
}

#[test]
fn test_write_interleaves_the_record_section() {
    let mut data_set = DataSet::new();
    let time = data_set.add_dim("time", 0, 1).unwrap();
    let x = data_set.add_dim("x", 2, 1).unwrap();
    data_set.set_num_records(2);
    data_set.add_var("a", DataType::Short).unwrap();
    data_set.redim_var("a", &[time.clone(), x.clone()]).unwrap();
    data_set.set_var_data_short("a", vec![1, 2, 3, 4]).unwrap();
    data_set.add_var("b", DataType::Int).unwrap();
    data_set.redim_var("b", &[time, x]).unwrap();
    data_set.set_var_data_int("b", vec![10, 20, 30, 40]).unwrap();

    let bytes: Vec<u8> = write_to_vec(&data_set, 0);

    // record 0 of every record variable, then record 1
    #[rustfmt::skip]
    let expected_data_bytes: [u8; 24] = [
        0x00, 0x01, 0x00, 0x02,             // "a" record 0 : 1, 2
        0x00, 0x00, 0x00, 0x0A,             // "b" record 0 : 10, 20
        0x00, 0x00, 0x00, 0x14,
        0x00, 0x03, 0x00, 0x04,             // "a" record 1 : 3, 4
        0x00, 0x00, 0x00, 0x1E,             // "b" record 1 : 30, 40
        0x00, 0x00, 0x00, 0x28,
    ];
    let data_start: usize = bytes.len() - expected_data_bytes.len();
    assert_eq!(&expected_data_bytes[..], &bytes[data_start..]);
}

#[test]
fn test_write_big_endian_int_attr() {
    let mut data_set = DataSet::new();
    data_set.add_global_attr_int("magic_number", vec![0x0102_0304]).unwrap();

    let bytes: Vec<u8> = write_to_vec(&data_set, 0);
    let needle: [u8; 4] = [0x01, 0x02, 0x03, 0x04];
    assert!(bytes.windows(4).any(|window| window == needle));
}

#[test]
fn test_write_fills_unset_variables() {
    let mut data_set = DataSet::new();
    data_set.add_fixed_dim("x", 2).unwrap();
    let x = data_set.get_dim("x").unwrap();
    data_set.add_var("unset", DataType::Short).unwrap();
    data_set.redim_var("unset", &[x]).unwrap();

    let bytes: Vec<u8> = write_to_vec(&data_set, 0);
    // 2 fill elements, no padding
    assert_eq!(&[0x80, 0x01, 0x80, 0x01][..], &bytes[bytes.len() - 4..]);
}

#[test]
fn test_write_pads_data_with_zeros() {
    let mut data_set = DataSet::new();
    let x = data_set.add_dim("x", 3, 1).unwrap();
    data_set.add_var("v", DataType::Byte).unwrap();
    data_set.redim_var("v", &[x]).unwrap();
    data_set.set_var_data_byte("v", vec![0xAA, 0xBB, 0xCC]).unwrap();

    let bytes: Vec<u8> = write_to_vec(&data_set, 0);
    assert_eq!(&[0xAA, 0xBB, 0xCC, 0x00][..], &bytes[bytes.len() - 4..]);
}

#[test]
fn test_write_header_min_size() {
    let empty_data_set = DataSet::new();

    let bytes: Vec<u8> = write_to_vec(&empty_data_set, 0);
    assert_eq!(32, bytes.len());

    let bytes: Vec<u8> = write_to_vec(&empty_data_set, 1024);
    assert_eq!(1024, bytes.len());
    // the reserved bytes are zeros
    assert!(bytes[32..].iter().all(|byte: &u8| *byte == 0));
}

#[test]
fn test_write_64_bit_offset_version() {
    let mut data_set = DataSet::new();
    data_set.set_version(Version::Offset64Bit);
    data_set.add_var("v", DataType::Double).unwrap();
    data_set.set_var_data_double("v", vec![1.0]).unwrap();

    let bytes: Vec<u8> = write_to_vec(&data_set, 0);
    // version byte
    assert_eq!(0x02, bytes[3]);
    // the header grew by the 4 extra `begin` bytes : 68 + 8 data bytes
    assert_eq!(76, bytes.len());
    // begin = 68, written over 8 bytes
    let begin_bytes: &[u8] = &bytes[60..68];
    assert_eq!(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x44][..], begin_bytes);
}

#[test]
fn test_write_data_length_mismatch() {
    let mut data_set = DataSet::new();
    let time = data_set.add_dim("time", 0, 1).unwrap();
    data_set.set_num_records(2);
    data_set.add_var("v", DataType::Int).unwrap();
    data_set.redim_var("v", &[time]).unwrap();
    data_set.set_var_data_int("v", vec![1, 2]).unwrap();

    // invalidate the supplied data afterwards
    data_set.set_num_records(3);

    let mut writer: FileWriter<Vec<u8>> = FileWriter::new(Vec::new());
    assert_eq!(
        WriteError::VariableMismatchDataLength {
            var_name: String::from("v"),
            req: 3,
            get: 2,
        },
        writer.write_data_set(&data_set, 0).unwrap_err()
    );
}

#[test]
fn test_create_new() {
    const TEST_FILE_NAME: &str = "test_create_new.nc";

    let tmp_dir: TempDir = TempDir::new(TMP_DIR_PREFIX).unwrap();
    let test_file_path: PathBuf = tmp_dir.path().join(TEST_FILE_NAME);
    assert_eq!(false, test_file_path.exists());

    // First create a new NetCDF-3 file
    let mut data_set = DataSet::new();
    data_set.add_global_attr_string("comment", "test_file_1").unwrap();
    let mut file_writer = FileWriter::create_new(&test_file_path).unwrap();
    file_writer.write_data_set(&data_set, 0).unwrap();
    assert_eq!(true, test_file_path.exists());

    // Try to recreate the already existing file
    assert_eq!(
        WriteError::IOErrorKind(std::io::ErrorKind::AlreadyExists),
        FileWriter::create_new(&test_file_path).err().unwrap(),
    );

    // The first file has not been overwritten
    let file_reader = FileReader::open(&test_file_path).unwrap();
    let read_data_set: DataSet = file_reader.close();
    assert_eq!(Some(String::from("test_file_1")), read_data_set.get_global_attr_as_string("comment"));

    tmp_dir.close().unwrap();
}

#[test]
fn test_open_overwrites() {
    const TEST_FILE_NAME: &str = "test_open.nc";

    let tmp_dir: TempDir = TempDir::new(TMP_DIR_PREFIX).unwrap();
    let test_file_path: PathBuf = tmp_dir.path().join(TEST_FILE_NAME);

    {
        let mut data_set = DataSet::new();
        data_set.add_global_attr_string("comment", "first").unwrap();
        let mut file_writer = FileWriter::open(&test_file_path).unwrap();
        file_writer.write_data_set(&data_set, 0).unwrap();
    }
    {
        let mut data_set = DataSet::new();
        data_set.add_global_attr_string("comment", "second").unwrap();
        let mut file_writer = FileWriter::open(&test_file_path).unwrap();
        file_writer.write_data_set(&data_set, 0).unwrap();
    }

    let file_reader = FileReader::open(&test_file_path).unwrap();
    let read_data_set: DataSet = file_reader.close();
    assert_eq!(Some(String::from("second")), read_data_set.get_global_attr_as_string("comment"));

    tmp_dir.close().unwrap();
}
