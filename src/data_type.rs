mod tests;

/// Name of `DataType::Byte` (a.k.a. `NC_BYTE`) used in the NetCDF C-API.
const BYTE_TYPE_C_API_NAME: &'static str = "NC_BYTE";
/// Name of `DataType::Char` (a.k.a. `NC_CHAR`) used in the NetCDF C-API.
const CHAR_TYPE_C_API_NAME: &'static str = "NC_CHAR";
/// Name of `DataType::Short` (a.k.a. `NC_SHORT`) used in the NetCDF C-API.
const SHORT_TYPE_C_API_NAME: &'static str = "NC_SHORT";
/// Name of `DataType::Int` (a.k.a. `NC_INT`) used in the NetCDF C-API.
const INT_TYPE_C_API_NAME: &'static str = "NC_INT";
/// Name of `DataType::Float` (a.k.a. `NC_FLOAT`) used in the NetCDF C-API.
const FLOAT_TYPE_C_API_NAME: &'static str = "NC_FLOAT";
/// Name of `DataType::Double` (a.k.a. `NC_DOUBLE`) used in the NetCDF C-API.
const DOUBLE_TYPE_C_API_NAME: &'static str = "NC_DOUBLE";

/// All the data types storable in NetCDF-3 attributes and variables
///
/// The numeric discriminants are the on-disk type tags. The container tags
/// (`DIMENSION`, `VARIABLE`, `ATTRIBUTE`) prefix the header lists and never
/// appear as a value type.
///
/// # Example
///
/// ```
/// use nc3::DataType;
///
/// assert_eq!("NC_BYTE",   DataType::Byte.c_api_name());
/// assert_eq!("NC_CHAR",   DataType::Char.c_api_name());
/// assert_eq!("NC_SHORT",  DataType::Short.c_api_name());
/// assert_eq!("NC_INT",    DataType::Int.c_api_name());
/// assert_eq!("NC_FLOAT",  DataType::Float.c_api_name());
/// assert_eq!("NC_DOUBLE", DataType::Double.c_api_name());
///
/// assert_eq!(1, DataType::Byte.size_of());
/// assert_eq!(1, DataType::Char.size_of());
/// assert_eq!(2, DataType::Short.size_of());
/// assert_eq!(4, DataType::Int.size_of());
/// assert_eq!(4, DataType::Float.size_of());
/// assert_eq!(8, DataType::Double.size_of());
/// ```
#[repr(u32)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// 8-bit unsigned integer, a.k.a. `NC_BYTE`
    Byte = 1,
    /// 8-bit character, a.k.a. `NC_CHAR`
    Char = 2,
    /// 16-bit signed integer, a.k.a. `NC_SHORT`
    Short = 3,
    /// 32-bit signed integer, a.k.a. `NC_INT`
    Int = 4,
    /// 32-bit floating-point number, a.k.a. `NC_FLOAT`
    Float = 5,
    /// 64-bit floating-point number, a.k.a. `NC_DOUBLE`
    Double = 6,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "DataType::{}",
            match self {
                DataType::Byte => "Byte",
                DataType::Char => "Char",
                DataType::Short => "Short",
                DataType::Int => "Int",
                DataType::Float => "Float",
                DataType::Double => "Double",
            }
        )
    }
}

impl std::convert::TryFrom<u32> for DataType {
    type Error = &'static str;
    fn try_from(value: u32) -> Result<DataType, &'static str> {
        match value {
            1_u32 => Ok(DataType::Byte),
            2_u32 => Ok(DataType::Char),
            3_u32 => Ok(DataType::Short),
            4_u32 => Ok(DataType::Int),
            5_u32 => Ok(DataType::Float),
            6_u32 => Ok(DataType::Double),
            _ => Err("Invalid value for a NetCDF-3 data type."),
        }
    }
}

impl DataType {
    /// Returns the size (in bytes) of one element of `DataType`.
    pub fn size_of(&self) -> usize {
        match self {
            DataType::Byte => std::mem::size_of::<u8>(),
            DataType::Char => std::mem::size_of::<u8>(),
            DataType::Short => std::mem::size_of::<i16>(),
            DataType::Int => std::mem::size_of::<i32>(),
            DataType::Float => std::mem::size_of::<f32>(),
            DataType::Double => std::mem::size_of::<f64>(),
        }
    }

    /// Returns the name of the `DataType` commonly used in the NetCDF C API.
    ///
    /// # See also
    ///
    /// The [NetCDF C-API](https://github.com/Unidata/netcdf-c/blob/master/include/netcdf.h)
    pub fn c_api_name(&self) -> &'static str {
        match self {
            DataType::Byte => BYTE_TYPE_C_API_NAME,
            DataType::Char => CHAR_TYPE_C_API_NAME,
            DataType::Short => SHORT_TYPE_C_API_NAME,
            DataType::Int => INT_TYPE_C_API_NAME,
            DataType::Float => FLOAT_TYPE_C_API_NAME,
            DataType::Double => DOUBLE_TYPE_C_API_NAME,
        }
    }
}
