pub mod parse_header_error;
pub use parse_header_error::ParseHeaderError;

use crate::DataType;

/// NetCDF-3 data set error
///
/// This error occurs when a mutation would leave the [`DataSet`](struct.DataSet.html)
/// in a state that is not a valid NetCDF-3 data set : duplicate or invalid names,
/// dangling dimensions, a second unlimited dimension, value vectors disagreeing with
/// the declared type, and so on.
///
/// # Example
///
/// ```
/// use nc3::{DataSet, DataType, error::InvalidDataSet};
///
/// const VAR_NAME: &str = "var_1";
///
/// let mut data_set = DataSet::new();
/// data_set.add_var(VAR_NAME, DataType::Int).unwrap();
///
/// // Try to add the same variable a second time
/// assert_eq!(
///     InvalidDataSet::VariableAlreadyExists(String::from(VAR_NAME)),
///     data_set.add_var(VAR_NAME, DataType::Int).unwrap_err()
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDataSet {
    DimensionAlreadyExists(String),
    DimensionNotDefined(String),
    DimensionNameNotValid(String),
    DimensionYetUsed {
        var_names: Vec<String>,
        dim_name: String,
    },
    FixedDimensionWithZeroSize(String),
    MaximumFixedDimensionSizeExceeded {
        dim_name: String,
        get: usize,
    },
    UnlimitedDimensionAlreadyExists(String),
    UnlimitedDimensionMustBeDefinedFirst {
        var_name: String,
        unlim_dim_name: String,
        get_dim_names: Vec<String>,
    },
    DimensionsUsedMultipleTimes {
        var_name: String,
        get_dim_names: Vec<String>,
    },
    DimensionIdsNotFound {
        searched: Vec<usize>,
        not_found: Vec<usize>,
    },
    MaximumDimensionsPerVariableExceeded {
        var_name: String,
        num_dims: usize,
    },

    VariableAlreadyExists(String),
    VariableNotDefined(String),
    VariableNameNotValid(String),
    VariableMismatchDataType {
        var_name: String,
        req: DataType,
        get: DataType,
    },
    VariableMismatchDataLength {
        var_name: String,
        req: usize,
        get: usize,
    },

    VariableAttributeAlreadyExists {
        var_name: String,
        attr_name: String,
    },
    VariableAttributeNotDefined {
        var_name: String,
        attr_name: String,
    },
    VariableAttributeNameNotValid {
        var_name: String,
        attr_name: String,
    },

    GlobalAttributeAlreadyExists(String),
    GlobalAttributeNotDefined(String),
    GlobalAttributeNameNotValid(String),
}

impl std::fmt::Display for InvalidDataSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for InvalidDataSet {}

/// Error occurring while a NetCDF-3 byte source is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The header bytes disagree with the format grammar (wrong magic word, wrong tag,
    /// negative count, unknown type tag, invalid padding, ...).
    ParseHeader(ParseHeaderError),
    /// The parsed header describes an invalid data set.
    DataSet(InvalidDataSet),
    /// The `begin` offsets of the variables are not increasing in header order, or a
    /// record-variable region starts before the end of the fixed-variable regions.
    UnorderedVariableOffsets {
        var_name: String,
    },
    /// A variable data region starts before the end of the header.
    VariableOffsetBeforeHeaderEnd {
        var_name: String,
        begin_offset: i64,
        header_size: usize,
    },
    /// The indeterminate record count (`numrecs = 2^32 - 1`) cannot be resolved because
    /// the trailing bytes are not a whole number of records.
    ComputationNumberOfRecords,
    VariableNotDefined(String),
    VariableMismatchDataType {
        var_name: String,
        req: DataType,
        get: DataType,
    },
    RecordIndexExceeded {
        index: usize,
        num_records: usize,
    },
    /// An I/O error, `std::io::ErrorKind::UnexpectedEof` when the byte source is
    /// exhausted in the middle of a data region.
    IOErrorKind(std::io::ErrorKind),
    Unexpected,
}

impl ReadError {
    pub fn header_is_incomplete(&self) -> bool {
        match &self {
            ReadError::ParseHeader(parse_header_err) => parse_header_err.header_is_incomplete(),
            _ => false,
        }
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ReadError {}

impl std::convert::From<InvalidDataSet> for ReadError {
    fn from(err: InvalidDataSet) -> Self {
        Self::DataSet(err)
    }
}

impl std::convert::From<ParseHeaderError> for ReadError {
    fn from(err: ParseHeaderError) -> Self {
        Self::ParseHeader(err)
    }
}

impl std::convert::From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> Self {
        Self::IOErrorKind(err.kind())
    }
}

/// Error occurring while a data set is serialized to a byte sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    IOErrorKind(std::io::ErrorKind),
    VariableNotDefined(String),
    /// The data supplied for a variable does not have the declared data type.
    VariableMismatchDataType {
        var_name: String,
        req: DataType,
        get: DataType,
    },
    /// The data supplied for a variable does not have the required number of elements.
    VariableMismatchDataLength {
        var_name: String,
        req: usize,
        get: usize,
    },
    /// A planned `begin` offset does not fit the 32-bit field of the classic version.
    ClassicOffsetOverflow {
        begin_offset: u64,
    },
    Unexpected,
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for WriteError {}

impl std::convert::From<std::io::Error> for WriteError {
    fn from(err: std::io::Error) -> Self {
        WriteError::IOErrorKind(err.kind())
    }
}
