mod tests;

use crate::data_values::DataValues;
use crate::name_string::is_valid_name;
use crate::DataType;

/// NetCDF-3 attribute
///
/// An attribute couples a name with a typed value vector. Attributes are owned either
/// by the data set (global attributes) or by a variable, and are created, renamed and
/// removed through the [`DataSet`](struct.DataSet.html) methods.
///
/// A `Char` attribute holds exactly one octet string whose byte length is the
/// attribute's element count ; the other types hold `len()` primitives.
///
/// # Example
///
/// ```
/// use nc3::{Attribute, DataSet, DataType};
///
/// let mut data_set = DataSet::new();
/// data_set.add_global_attr_int("levels", vec![1_i32, 2, 3]).unwrap();
/// data_set.add_global_attr_string("units", "m").unwrap();
///
/// let levels: &Attribute = data_set.get_global_attr("levels").unwrap();
/// assert_eq!("levels",                    levels.name());
/// assert_eq!(DataType::Int,               levels.data_type());
/// assert_eq!(3,                           levels.len());
/// assert_eq!(Some(&[1_i32, 2, 3][..]),    levels.get_int());
/// assert_eq!(None,                        levels.get_float());
///
/// let units: &Attribute = data_set.get_global_attr("units").unwrap();
/// assert_eq!(DataType::Char,              units.data_type());
/// assert_eq!(1,                           units.len());
/// assert_eq!(Some(String::from("m")),     units.get_as_string());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) values: DataValues,
}

impl Attribute {
    /// Creates a new attribute from a typed value vector.
    pub(crate) fn new(name: &str, values: DataValues) -> Result<Attribute, String> {
        Attribute::check_attr_name(name)?;
        Ok(Attribute {
            name: name.to_string(),
            values,
        })
    }

    /// Creates a new attribute containing `Byte` values.
    pub(in crate::data_set) fn new_byte(name: &str, data: Vec<u8>) -> Result<Attribute, String> {
        Attribute::new(name, DataValues::Byte(data))
    }

    /// Creates a new attribute containing `Char` octets.
    pub(in crate::data_set) fn new_char(name: &str, data: Vec<u8>) -> Result<Attribute, String> {
        Attribute::new(name, DataValues::Char(data))
    }

    /// Creates a new attribute containing `Short` values.
    pub(in crate::data_set) fn new_short(name: &str, data: Vec<i16>) -> Result<Attribute, String> {
        Attribute::new(name, DataValues::Short(data))
    }

    /// Creates a new attribute containing `Int` values.
    pub(in crate::data_set) fn new_int(name: &str, data: Vec<i32>) -> Result<Attribute, String> {
        Attribute::new(name, DataValues::Int(data))
    }

    /// Creates a new attribute containing `Float` values.
    pub(in crate::data_set) fn new_float(name: &str, data: Vec<f32>) -> Result<Attribute, String> {
        Attribute::new(name, DataValues::Float(data))
    }

    /// Creates a new attribute containing `Double` values.
    pub(in crate::data_set) fn new_double(name: &str, data: Vec<f64>) -> Result<Attribute, String> {
        Attribute::new(name, DataValues::Double(data))
    }

    /// Returns the name of the attribute.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the NetCDF-3 data type of the attribute.
    pub fn data_type(&self) -> DataType {
        self.values.data_type()
    }

    /// Returns the number of elements (the length) of the attribute.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns the typed value vector of the attribute.
    pub fn values(&self) -> &DataValues {
        &self.values
    }

    /// Returns the `Byte` values, or `None` if the attribute has another data type.
    pub fn get_byte(&self) -> Option<&[u8]> {
        self.values.get_byte()
    }

    /// Returns the `Char` octets, or `None` if the attribute has another data type.
    pub fn get_char(&self) -> Option<&[u8]> {
        self.values.get_char()
    }

    /// Returns the `Char` octets as a `String`.
    ///
    /// Returns `None` if the attribute is not a `Char` attribute, or if its octets are
    /// not valid UTF-8.
    pub fn get_as_string(&self) -> Option<String> {
        self.values.get_as_string()
    }

    /// Returns the `Short` values, or `None` if the attribute has another data type.
    pub fn get_short(&self) -> Option<&[i16]> {
        self.values.get_short()
    }

    /// Returns the `Int` values, or `None` if the attribute has another data type.
    pub fn get_int(&self) -> Option<&[i32]> {
        self.values.get_int()
    }

    /// Returns the `Float` values, or `None` if the attribute has another data type.
    pub fn get_float(&self) -> Option<&[f32]> {
        self.values.get_float()
    }

    /// Returns the `Double` values, or `None` if the attribute has another data type.
    pub fn get_double(&self) -> Option<&[f64]> {
        self.values.get_double()
    }

    pub(crate) fn check_attr_name(attr_name: &str) -> Result<(), String> {
        match is_valid_name(attr_name) {
            true => Ok(()),
            false => Err(attr_name.to_string()),
        }
    }
}
