#![cfg(test)]
use std::io::Cursor;

use super::FileReader;
use crate::error::parse_header_error::ParseHeaderErrorKind;
use crate::error::ReadError;
use crate::{DataSet, DataType, FileWriter, Version};

fn open_bytes(bytes: Vec<u8>) -> Result<FileReader, ReadError> {
    FileReader::open_seek_read("test.nc", Box::new(Cursor::new(bytes)))
}

fn write_to_vec(data_set: &DataSet) -> Vec<u8> {
    let mut writer: FileWriter<Vec<u8>> = FileWriter::new(Vec::new());
    writer.write_data_set(data_set, 0).unwrap();
    writer.into_inner()
}

fn parse_header_error_kind(err: ReadError) -> ParseHeaderErrorKind {
    match err {
        ReadError::ParseHeader(parse_err) => parse_err.kind,
        other => panic!("expected a header parse error, got: {:?}", other),
    }
}

#[rustfmt::skip]
const SCALAR_DOUBLE_FILE_BYTES: [u8; 72] = [
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
    0x00, 0x00, 0x00, 0x40,             // begin = 64
    0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 1.0 (IEEE-754 double)
];

#[test]
fn test_read_empty_data_set() {
    let bytes: Vec<u8> = write_to_vec(&DataSet::new());
    assert_eq!(32, bytes.len());

    let reader: FileReader = open_bytes(bytes).unwrap();
    assert_eq!(Version::Classic, reader.version());

    let data_set: DataSet = reader.read_data_set().unwrap();
    assert_eq!(0, data_set.num_records());
    assert_eq!(0, data_set.num_dims());
    assert_eq!(0, data_set.num_global_attrs());
    assert_eq!(0, data_set.num_vars());
    assert_eq!(DataSet::new(), data_set);
}

#[test]
fn test_read_bad_magic_word() {
    let mut bytes: Vec<u8> = vec![0; 32];
    bytes[..4].copy_from_slice(&[0x58, 0x44, 0x46, 0x01]); // "XDF"

    let err: ReadError = open_bytes(bytes).unwrap_err();
    assert_eq!(false, err.header_is_incomplete());
    assert_eq!(ParseHeaderErrorKind::MagicWord, parse_header_error_kind(err));
}

#[test]
fn test_read_bad_version_number() {
    let mut bytes: Vec<u8> = vec![0; 32];
    bytes[..4].copy_from_slice(&[0x43, 0x44, 0x46, 0x03]); // version byte = 3

    let err: ReadError = open_bytes(bytes).unwrap_err();
    assert_eq!(ParseHeaderErrorKind::VersionNumber, parse_header_error_kind(err));
}

#[test]
fn test_read_negative_count() {
    #[rustfmt::skip]
    let bytes: Vec<u8> = vec![
        0x43, 0x44, 0x46, 0x01,             // magic word and version
        0x00, 0x00, 0x00, 0x00,             // numrecs = 0
        0x00, 0x00, 0x00, 0x0A,             // DIMENSION tag
        0xFF, 0xFF, 0xFF, 0xFF,             // count = -1
    ];
    let err: ReadError = open_bytes(bytes).unwrap_err();
    assert_eq!(ParseHeaderErrorKind::NonNegativeI32, parse_header_error_kind(err));
}

#[test]
fn test_read_bad_dim_tag() {
    #[rustfmt::skip]
    let bytes: Vec<u8> = vec![
        0x43, 0x44, 0x46, 0x01,             // magic word and version
        0x00, 0x00, 0x00, 0x00,             // numrecs = 0
        0x00, 0x00, 0x00, 0x0C,             // ATTRIBUTE tag where the dimension list is expected
        0x00, 0x00, 0x00, 0x01,
    ];
    let err: ReadError = open_bytes(bytes).unwrap_err();
    assert_eq!(ParseHeaderErrorKind::DimTag, parse_header_error_kind(err));
}

#[test]
fn test_read_unknown_data_type() {
    #[rustfmt::skip]
    let bytes: Vec<u8> = vec![
        0x43, 0x44, 0x46, 0x01,             // magic word and version
        0x00, 0x00, 0x00, 0x00,             // numrecs = 0
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT dimension list
        0x00, 0x00, 0x00, 0x0C,             // ATTRIBUTE tag
        0x00, 0x00, 0x00, 0x01,             // 1 attribute
        0x00, 0x00, 0x00, 0x01,             // name length = 1
        0x61, 0x00, 0x00, 0x00,             // "a" and 3 padding bytes
        0x00, 0x00, 0x00, 0x07,             // type tag 7 is not documented
        0x00, 0x00, 0x00, 0x01,             // nelems = 1
        0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT variable list
    ];
    let err: ReadError = open_bytes(bytes).unwrap_err();
    assert_eq!(ParseHeaderErrorKind::DataType, parse_header_error_kind(err));
}

#[test]
fn test_read_invalid_zero_padding() {
    #[rustfmt::skip]
    let bytes: Vec<u8> = vec![
        0x43, 0x44, 0x46, 0x01,             // magic word and version
        0x00, 0x00, 0x00, 0x00,             // numrecs = 0
        0x00, 0x00, 0x00, 0x0A,             // DIMENSION tag
        0x00, 0x00, 0x00, 0x01,             // 1 dimension
        0x00, 0x00, 0x00, 0x01,             // name length = 1
        0x78, 0xFF, 0x00, 0x00,             // "x" but a non-zero padding byte
        0x00, 0x00, 0x00, 0x03,             // dimension length = 3
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT global attribute list
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ABSENT variable list
    ];
    let err: ReadError = open_bytes(bytes).unwrap_err();
    assert_eq!(ParseHeaderErrorKind::ZeroPadding, parse_header_error_kind(err));
}

#[test]
fn test_read_truncated_header() {
    let bytes: Vec<u8> = SCALAR_DOUBLE_FILE_BYTES[..20].to_vec();
    let err: ReadError = open_bytes(bytes).unwrap_err();
    assert_eq!(true, err.header_is_incomplete());
}

#[test]
fn test_read_scalar_double() {
    let mut reader: FileReader = open_bytes(SCALAR_DOUBLE_FILE_BYTES.to_vec()).unwrap();

    assert_eq!(Version::Classic, reader.version());
    assert_eq!(true, reader.data_set().has_var("v"));
    assert_eq!(Some(DataType::Double), reader.data_set().var_data_type("v"));
    assert_eq!(Some(1), reader.data_set().var_len("v"));

    let values: Vec<f64> = reader.read_var_double("v").unwrap();
    assert_eq!(vec![1.0], values);
}

#[test]
fn test_read_flipped_exponent_byte() {
    // the same bytes with the first byte of the payload flipped from 0x3F to 0x40
    let mut bytes: Vec<u8> = SCALAR_DOUBLE_FILE_BYTES.to_vec();
    bytes[64] = 0x40;

    let mut reader: FileReader = open_bytes(bytes).unwrap();
    let values: Vec<f64> = reader.read_var_double("v").unwrap();
    assert_eq!(vec![2.0], values);
}

fn record_var_data_set() -> DataSet {
    let mut data_set = DataSet::new();
    let time = data_set.add_dim("time", 0, 1).unwrap();
    let x = data_set.add_dim("x", 2, 1).unwrap();
    data_set.set_num_records(2);
    data_set.add_var("r", DataType::Int).unwrap();
    data_set.redim_var("r", &[time, x]).unwrap();
    data_set.set_var_data_int("r", vec![10, 20, 30, 40]).unwrap();
    data_set
}

#[test]
fn test_read_record_var() {
    let data_set: DataSet = record_var_data_set();
    let bytes: Vec<u8> = write_to_vec(&data_set);

    let mut reader: FileReader = open_bytes(bytes).unwrap();
    assert_eq!(2, reader.data_set().num_records());
    assert_eq!(Some(true), reader.data_set().is_record_var("r"));
    assert_eq!(Some(4), reader.data_set().var_len("r"));

    let values: Vec<i32> = reader.read_var_int("r").unwrap();
    assert_eq!(vec![10, 20, 30, 40], values);

    let record: Vec<i32> = reader.read_record_int("r", 1).unwrap();
    assert_eq!(vec![30, 40], record);

    assert_eq!(
        ReadError::RecordIndexExceeded {
            index: 2,
            num_records: 2,
        },
        reader.read_record("r", 2).unwrap_err()
    );
}

#[test]
fn test_read_data_set_round_trip() {
    let data_set: DataSet = record_var_data_set();
    let bytes: Vec<u8> = write_to_vec(&data_set);

    let read_data_set: DataSet = open_bytes(bytes).unwrap().read_data_set().unwrap();
    assert_eq!(data_set, read_data_set);
}

#[test]
fn test_read_var_mismatch_data_type() {
    let bytes: Vec<u8> = write_to_vec(&record_var_data_set());
    let mut reader: FileReader = open_bytes(bytes).unwrap();

    assert_eq!(
        ReadError::VariableMismatchDataType {
            var_name: String::from("r"),
            req: DataType::Int,
            get: DataType::Float,
        },
        reader.read_var_float("r").unwrap_err()
    );
    assert_eq!(
        ReadError::VariableNotDefined(String::from("undefined")),
        reader.read_var("undefined").unwrap_err()
    );
}

/// Two scalar `Int` variables : the header is 96 bytes long, the `begin` fields lie at
/// the bytes `60..64` ("v1") and `92..96` ("v2"), and the declared offsets are 96 and
/// 100.
fn two_scalar_int_vars_bytes() -> Vec<u8> {
    let mut data_set = DataSet::new();
    data_set.add_var("v1", DataType::Int).unwrap();
    data_set.set_var_data_int("v1", vec![1]).unwrap();
    data_set.add_var("v2", DataType::Int).unwrap();
    data_set.set_var_data_int("v2", vec![2]).unwrap();

    let bytes: Vec<u8> = write_to_vec(&data_set);
    assert_eq!(104, bytes.len());
    assert_eq!(&96_i32.to_be_bytes()[..], &bytes[60..64]);
    assert_eq!(&100_i32.to_be_bytes()[..], &bytes[92..96]);
    bytes
}

#[test]
fn test_read_unordered_var_offsets() {
    let mut bytes: Vec<u8> = two_scalar_int_vars_bytes();
    // swap the two begin offsets
    bytes[60..64].copy_from_slice(&100_i32.to_be_bytes());
    bytes[92..96].copy_from_slice(&96_i32.to_be_bytes());

    assert_eq!(
        ReadError::UnorderedVariableOffsets {
            var_name: String::from("v2"),
        },
        open_bytes(bytes).unwrap_err()
    );
}

#[test]
fn test_read_var_offset_before_header_end() {
    let mut bytes: Vec<u8> = two_scalar_int_vars_bytes();
    bytes[60..64].copy_from_slice(&50_i32.to_be_bytes());

    assert_eq!(
        ReadError::VariableOffsetBeforeHeaderEnd {
            var_name: String::from("v1"),
            begin_offset: 50,
            header_size: 96,
        },
        open_bytes(bytes).unwrap_err()
    );
}

#[test]
fn test_read_record_var_offset_before_fixed_regions() {
    let mut data_set = DataSet::new();
    let time = data_set.add_dim("time", 0, 1).unwrap();
    data_set.set_num_records(1);
    data_set.add_var("fix", DataType::Int).unwrap();
    data_set.set_var_data_int("fix", vec![1]).unwrap();
    data_set.add_var("rec", DataType::Int).unwrap();
    data_set.redim_var("rec", &[time]).unwrap();
    data_set.set_var_data_int("rec", vec![2]).unwrap();

    let mut bytes: Vec<u8> = write_to_vec(&data_set);
    // the record variable is declared last: its begin field is the last 4 header bytes
    let header_size: usize = bytes.len() - 8;
    let rec_begin_pos: usize = header_size - 4;
    // point the record region into the fixed region
    bytes[rec_begin_pos..rec_begin_pos + 4].copy_from_slice(&(header_size as i32).to_be_bytes());

    assert_eq!(
        ReadError::UnorderedVariableOffsets {
            var_name: String::from("rec"),
        },
        open_bytes(bytes).unwrap_err()
    );
}

#[test]
fn test_read_indeterminate_num_records() {
    let data_set: DataSet = record_var_data_set();
    let mut bytes: Vec<u8> = write_to_vec(&data_set);
    // the streaming sentinel
    bytes[4..8].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);

    let reader: FileReader = open_bytes(bytes).unwrap();
    // resolved by counting the trailing record bytes
    assert_eq!(2, reader.data_set().num_records());

    let read_data_set: DataSet = reader.read_data_set().unwrap();
    assert_eq!(data_set, read_data_set);
}

#[test]
fn test_read_indeterminate_num_records_not_a_whole_record() {
    let mut bytes: Vec<u8> = write_to_vec(&record_var_data_set());
    bytes[4..8].copy_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
    bytes.push(0x00); // the trailing bytes are no longer a whole number of records

    assert_eq!(
        ReadError::ComputationNumberOfRecords,
        open_bytes(bytes).unwrap_err()
    );
}
