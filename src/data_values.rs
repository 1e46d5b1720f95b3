mod tests;

use crate::DataType;

/// Wraps the six NetCDF-3 data types into typed value vectors.
///
/// `DataValues` carries the values of the attributes and the data of the variables.
/// Each variant stores a homogeneous vector, so a value vector always matches its
/// declared data type. `Char` values are raw octets : their number of elements is
/// their byte length.
///
/// # Example
///
/// ```
/// use nc3::{DataValues, DataType};
///
/// let values = DataValues::Int(vec![1_i32, 2, 3]);
///
/// assert_eq!(DataType::Int,           values.data_type());
/// assert_eq!(3,                       values.len());
/// assert_eq!(Some(&[1_i32, 2, 3][..]), values.get_int());
/// assert_eq!(None,                    values.get_float());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DataValues {
    Byte(Vec<u8>),
    Char(Vec<u8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Float(Vec<f32>),
    Double(Vec<f64>),
}

impl DataValues {
    /// Creates a zero-filled vector of `length` elements of the `data_type`.
    pub(crate) fn new(data_type: DataType, length: usize) -> Self {
        match data_type {
            DataType::Byte => DataValues::Byte(vec![0; length]),
            DataType::Char => DataValues::Char(vec![0; length]),
            DataType::Short => DataValues::Short(vec![0; length]),
            DataType::Int => DataValues::Int(vec![0; length]),
            DataType::Float => DataValues::Float(vec![0.0; length]),
            DataType::Double => DataValues::Double(vec![0.0; length]),
        }
    }

    /// Returns the NetCDF-3 data type of the stored values.
    pub fn data_type(&self) -> DataType {
        match self {
            DataValues::Byte(_) => DataType::Byte,
            DataValues::Char(_) => DataType::Char,
            DataValues::Short(_) => DataType::Short,
            DataValues::Int(_) => DataType::Int,
            DataValues::Float(_) => DataType::Float,
            DataValues::Double(_) => DataType::Double,
        }
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        match self {
            DataValues::Byte(data) => data.len(),
            DataValues::Char(data) => data.len(),
            DataValues::Short(data) => data.len(),
            DataValues::Int(data) => data.len(),
            DataValues::Float(data) => data.len(),
            DataValues::Double(data) => data.len(),
        }
    }

    /// Returns `true` if no element is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a slice over the internal `Vec<u8>` of a `Byte` vector, or `None`.
    pub fn get_byte(&self) -> Option<&[u8]> {
        match self {
            DataValues::Byte(data) => Some(data),
            _ => None,
        }
    }

    /// Returns a slice over the internal octets of a `Char` vector, or `None`.
    pub fn get_char(&self) -> Option<&[u8]> {
        match self {
            DataValues::Char(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the `Char` octets as a `String`.
    ///
    /// Returns `None` if the vector is not a `Char` vector, or if its octets are not
    /// valid UTF-8.
    pub fn get_as_string(&self) -> Option<String> {
        match self {
            DataValues::Char(data) => String::from_utf8(data.to_vec()).ok(),
            _ => None,
        }
    }

    /// Returns a slice over the internal `Vec<i16>` of a `Short` vector, or `None`.
    pub fn get_short(&self) -> Option<&[i16]> {
        match self {
            DataValues::Short(data) => Some(data),
            _ => None,
        }
    }

    /// Returns a slice over the internal `Vec<i32>` of an `Int` vector, or `None`.
    pub fn get_int(&self) -> Option<&[i32]> {
        match self {
            DataValues::Int(data) => Some(data),
            _ => None,
        }
    }

    /// Returns a slice over the internal `Vec<f32>` of a `Float` vector, or `None`.
    pub fn get_float(&self) -> Option<&[f32]> {
        match self {
            DataValues::Float(data) => Some(data),
            _ => None,
        }
    }

    /// Returns a slice over the internal `Vec<f64>` of a `Double` vector, or `None`.
    pub fn get_double(&self) -> Option<&[f64]> {
        match self {
            DataValues::Double(data) => Some(data),
            _ => None,
        }
    }

    /// Extracts the internal `Vec<u8>` of a `Byte` vector.
    ///
    /// The instance is returned as the error when the vector has another data type,
    /// so no copy of the buffer is ever done.
    pub fn into_byte(self) -> Result<Vec<u8>, DataValues> {
        if let DataValues::Byte(data) = self {
            return Ok(data);
        }
        Err(self)
    }

    /// Extracts the internal octets of a `Char` vector (see [into_byte](enum.DataValues.html#method.into_byte)).
    pub fn into_char(self) -> Result<Vec<u8>, DataValues> {
        if let DataValues::Char(data) = self {
            return Ok(data);
        }
        Err(self)
    }

    /// Extracts the internal `Vec<i16>` of a `Short` vector (see [into_byte](enum.DataValues.html#method.into_byte)).
    pub fn into_short(self) -> Result<Vec<i16>, DataValues> {
        if let DataValues::Short(data) = self {
            return Ok(data);
        }
        Err(self)
    }

    /// Extracts the internal `Vec<i32>` of an `Int` vector (see [into_byte](enum.DataValues.html#method.into_byte)).
    pub fn into_int(self) -> Result<Vec<i32>, DataValues> {
        if let DataValues::Int(data) = self {
            return Ok(data);
        }
        Err(self)
    }

    /// Extracts the internal `Vec<f32>` of a `Float` vector (see [into_byte](enum.DataValues.html#method.into_byte)).
    pub fn into_float(self) -> Result<Vec<f32>, DataValues> {
        if let DataValues::Float(data) = self {
            return Ok(data);
        }
        Err(self)
    }

    /// Extracts the internal `Vec<f64>` of a `Double` vector (see [into_byte](enum.DataValues.html#method.into_byte)).
    pub fn into_double(self) -> Result<Vec<f64>, DataValues> {
        if let DataValues::Double(data) = self {
            return Ok(data);
        }
        Err(self)
    }
}
