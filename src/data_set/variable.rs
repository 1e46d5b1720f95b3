mod tests;

use std::collections::HashSet;
use std::iter::FromIterator;
use std::rc::Rc;

use crate::data_values::DataValues;
use crate::io::padded_size;
use crate::{is_valid_name, Attribute, DataType, Dimension, InvalidDataSet, NC_MAX_VAR_DIMS};

/// NetCDF-3 variable
///
/// `Variable` instances are managed by the struct [`DataSet`](struct.DataSet.html).
///
/// A variable couples a name, an ordered list of dimensions, its own attributes, a data
/// type and (optionally) its data. A variable is a *record* variable when its first
/// dimension is the *unlimited-size* dimension : its data then grows record by record,
/// while a *fixed-size* variable is stored as a single contiguous block. The unlimited
/// dimension is only accepted in the first position.
///
/// A variable owns its data. Data is supplied through
/// [`DataSet::set_var_data`](struct.DataSet.html#method.set_var_data) (or the typed
/// variants) ; a variable left without data is filled with the default NetCDF fill
/// value of its type when the data set is written.
///
/// # Example
///
/// ```
/// use nc3::{DataSet, DataType, Variable};
///
/// let mut data_set = DataSet::new();
/// let time = data_set.add_dim("time", 0, 1).unwrap();
/// let x = data_set.add_dim("x", 3, 1).unwrap();
///
/// data_set.add_var("speed", DataType::Float).unwrap();
/// data_set.redim_var("speed", &[time, x]).unwrap();
///
/// let var: &Variable = data_set.get_var("speed").unwrap();
/// assert_eq!("speed",                     var.name());
/// assert_eq!(DataType::Float,             var.data_type());
/// assert_eq!(2,                           var.num_dims());
/// assert_eq!(vec!["time", "x"],           var.dim_names());
/// assert_eq!(true,                        var.is_record_var());
/// assert_eq!(3,                           var.chunk_len());
/// assert_eq!(12,                          var.chunk_size());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub(crate) name: String,
    pub(crate) dims: Vec<Rc<Dimension>>,
    pub(crate) attrs: Vec<Attribute>,
    pub(crate) data_type: DataType,
    pub(crate) data: Option<DataValues>,
}

impl Variable {
    pub(in crate::data_set) fn new(
        var_name: &str,
        var_dims: Vec<Rc<Dimension>>,
        data_type: DataType,
    ) -> Result<Variable, InvalidDataSet> {
        Variable::check_var_name(var_name)?;
        Variable::check_dims_validity(var_name, &var_dims)?;

        Ok(Variable {
            name: var_name.to_string(),
            dims: var_dims,
            attrs: vec![],
            data_type,
            data: None,
        })
    }

    /// Returns the name of the variable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the data type of the variable.
    pub fn data_type(&self) -> DataType {
        self.data_type.clone()
    }

    /// Returns the number of dimensions (the rank) of the variable.
    pub fn num_dims(&self) -> usize {
        self.dims.len()
    }

    /// Returns the list of the dimensions.
    pub fn get_dims(&self) -> Vec<Rc<Dimension>> {
        self.dims.clone()
    }

    /// Returns the list of the dimension names.
    pub fn dim_names(&self) -> Vec<String> {
        self.dims.iter().map(|dim: &Rc<Dimension>| dim.name()).collect()
    }

    /// Returns `true` if the variable is defined over the named dimension.
    pub fn use_dim(&self, dim_name: &str) -> bool {
        self.dims
            .iter()
            .any(|dim: &Rc<Dimension>| *dim.name.borrow() == dim_name)
    }

    /// Returns :
    ///
    /// - `true` if the variable is defined over the *unlimited-size* dimension, then grows record by record
    /// - `false` otherwise
    pub fn is_record_var(&self) -> bool {
        match self.dims.first() {
            None => false,
            Some(first_dim) => first_dim.is_unlimited(),
        }
    }

    /// Returns the number of elements per chunk.
    ///
    /// The chunk of a *fixed-size* variable is its whole data block ; the chunk of a
    /// *record* variable is one record (the record axis is left out of the product).
    pub fn chunk_len(&self) -> usize {
        let skip_len: usize = if self.is_record_var() { 1 } else { 0 };
        self.dims
            .iter()
            .skip(skip_len)
            .fold(1_usize, |product, dim| product.saturating_mul(dim.size()))
    }

    /// Returns the size of each chunk (number of bytes), including the padding bytes.
    ///
    /// This is the `vsize` header field of the variable.
    ///
    /// # Example
    ///
    /// ```
    /// use nc3::{DataSet, DataType, Variable};
    ///
    /// let mut data_set = DataSet::new();
    /// data_set.add_var("scalar_short", DataType::Short).unwrap();
    /// data_set.add_var("scalar_double", DataType::Double).unwrap();
    ///
    /// // 2 useful bytes and 2 padding bytes
    /// assert_eq!(4,       data_set.get_var("scalar_short").unwrap().chunk_size());
    /// // 8 useful bytes, no padding
    /// assert_eq!(8,       data_set.get_var("scalar_double").unwrap().chunk_size());
    /// ```
    pub fn chunk_size(&self) -> usize {
        padded_size(self.chunk_len().saturating_mul(self.data_type.size_of()))
    }

    /// Returns the data of the variable, or `None` if no data has been supplied.
    pub fn data(&self) -> Option<&DataValues> {
        self.data.as_ref()
    }

    /// Returns the number of attributes.
    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }

    /// Returns :
    ///
    /// - `true` if the variable has the attribute
    /// - `false` if not
    pub fn has_attr(&self, attr_name: &str) -> bool {
        self.find_attr_from_name(attr_name).is_ok()
    }

    /// Returns all attributes defined in the variable.
    pub fn get_attrs(&self) -> Vec<&Attribute> {
        self.attrs.iter().collect()
    }

    /// Returns the names of all attributes defined in the variable.
    pub fn get_attr_names(&self) -> Vec<String> {
        self.attrs.iter().map(|attr: &Attribute| attr.name().to_string()).collect()
    }

    /// Returns a reference to the named attribute, or `None` if it is not defined.
    pub fn get_attr(&self, attr_name: &str) -> Option<&Attribute> {
        self.find_attr_from_name(attr_name).map(|(_index, attr)| attr).ok()
    }

    /// Returns the attribute value as a `&[u8]` (see [Attribute::get_byte](struct.Attribute.html#method.get_byte)).
    pub fn get_attr_byte(&self, attr_name: &str) -> Option<&[u8]> {
        self.get_attr(attr_name)?.get_byte()
    }

    /// Returns the attribute octets as a `&[u8]` (see [Attribute::get_char](struct.Attribute.html#method.get_char)).
    pub fn get_attr_char(&self, attr_name: &str) -> Option<&[u8]> {
        self.get_attr(attr_name)?.get_char()
    }

    /// Returns the attribute value as a `String` (see [Attribute::get_as_string](struct.Attribute.html#method.get_as_string)).
    pub fn get_attr_as_string(&self, attr_name: &str) -> Option<String> {
        self.get_attr(attr_name)?.get_as_string()
    }

    /// Returns the attribute value as a `&[i16]` (see [Attribute::get_short](struct.Attribute.html#method.get_short)).
    pub fn get_attr_short(&self, attr_name: &str) -> Option<&[i16]> {
        self.get_attr(attr_name)?.get_short()
    }

    /// Returns the attribute value as a `&[i32]` (see [Attribute::get_int](struct.Attribute.html#method.get_int)).
    pub fn get_attr_int(&self, attr_name: &str) -> Option<&[i32]> {
        self.get_attr(attr_name)?.get_int()
    }

    /// Returns the attribute value as a `&[f32]` (see [Attribute::get_float](struct.Attribute.html#method.get_float)).
    pub fn get_attr_float(&self, attr_name: &str) -> Option<&[f32]> {
        self.get_attr(attr_name)?.get_float()
    }

    /// Returns the attribute value as a `&[f64]` (see [Attribute::get_double](struct.Attribute.html#method.get_double)).
    pub fn get_attr_double(&self, attr_name: &str) -> Option<&[f64]> {
        self.get_attr(attr_name)?.get_double()
    }

    /// Appends a new attribute.
    ///
    /// An error is returned if another attribute with the same name is already defined.
    fn add_attr(&mut self, new_attr: Attribute) -> Result<(), InvalidDataSet> {
        if self.find_attr_from_name(&new_attr.name).is_ok() {
            return Err(InvalidDataSet::VariableAttributeAlreadyExists {
                var_name: self.name.to_string(),
                attr_name: new_attr.name.to_string(),
            });
        }
        self.attrs.push(new_attr);
        Ok(())
    }

    /// Appends a new `Byte` attribute.
    pub fn add_attr_byte(&mut self, attr_name: &str, data: Vec<u8>) -> Result<(), InvalidDataSet> {
        let attr: Attribute = Attribute::new_byte(attr_name, data).map_err(|attr_name: String| {
            InvalidDataSet::VariableAttributeNameNotValid {
                var_name: self.name.to_string(),
                attr_name,
            }
        })?;
        self.add_attr(attr)
    }

    /// Appends a new `Char` attribute from raw octets.
    pub fn add_attr_char(&mut self, attr_name: &str, data: Vec<u8>) -> Result<(), InvalidDataSet> {
        let attr: Attribute = Attribute::new_char(attr_name, data).map_err(|attr_name: String| {
            InvalidDataSet::VariableAttributeNameNotValid {
                var_name: self.name.to_string(),
                attr_name,
            }
        })?;
        self.add_attr(attr)
    }

    /// Appends a new `Char` attribute from a UTF-8 string.
    pub fn add_attr_string<T: AsRef<str>>(&mut self, attr_name: &str, data: T) -> Result<(), InvalidDataSet> {
        self.add_attr_char(attr_name, String::from(data.as_ref()).into_bytes())
    }

    /// Appends a new `Short` attribute.
    pub fn add_attr_short(&mut self, attr_name: &str, data: Vec<i16>) -> Result<(), InvalidDataSet> {
        let attr: Attribute = Attribute::new_short(attr_name, data).map_err(|attr_name: String| {
            InvalidDataSet::VariableAttributeNameNotValid {
                var_name: self.name.to_string(),
                attr_name,
            }
        })?;
        self.add_attr(attr)
    }

    /// Appends a new `Int` attribute.
    pub fn add_attr_int(&mut self, attr_name: &str, data: Vec<i32>) -> Result<(), InvalidDataSet> {
        let attr: Attribute = Attribute::new_int(attr_name, data).map_err(|attr_name: String| {
            InvalidDataSet::VariableAttributeNameNotValid {
                var_name: self.name.to_string(),
                attr_name,
            }
        })?;
        self.add_attr(attr)
    }

    /// Appends a new `Float` attribute.
    pub fn add_attr_float(&mut self, attr_name: &str, data: Vec<f32>) -> Result<(), InvalidDataSet> {
        let attr: Attribute = Attribute::new_float(attr_name, data).map_err(|attr_name: String| {
            InvalidDataSet::VariableAttributeNameNotValid {
                var_name: self.name.to_string(),
                attr_name,
            }
        })?;
        self.add_attr(attr)
    }

    /// Appends a new `Double` attribute.
    pub fn add_attr_double(&mut self, attr_name: &str, data: Vec<f64>) -> Result<(), InvalidDataSet> {
        let attr: Attribute = Attribute::new_double(attr_name, data).map_err(|attr_name: String| {
            InvalidDataSet::VariableAttributeNameNotValid {
                var_name: self.name.to_string(),
                attr_name,
            }
        })?;
        self.add_attr(attr)
    }

    /// Renames an existing attribute.
    ///
    /// An error is returned if :
    ///  - the `old_attr_name` attribute does not exist
    ///  - another `new_attr_name` attribute already exists
    ///  - `new_attr_name` is not a valid NetCDF-3 name
    pub(in crate::data_set) fn rename_attr(
        &mut self,
        old_attr_name: &str,
        new_attr_name: &str,
    ) -> Result<(), InvalidDataSet> {
        if old_attr_name == new_attr_name {
            return Ok(());
        }
        let renamed_attr_index: usize = self.find_attr_from_name(old_attr_name)?.0;
        if self.find_attr_from_name(new_attr_name).is_ok() {
            return Err(InvalidDataSet::VariableAttributeAlreadyExists {
                var_name: self.name.to_string(),
                attr_name: new_attr_name.to_string(),
            });
        }
        Attribute::check_attr_name(new_attr_name).map_err(|attr_name: String| {
            InvalidDataSet::VariableAttributeNameNotValid {
                var_name: self.name.to_string(),
                attr_name,
            }
        })?;
        self.attrs[renamed_attr_index].name = new_attr_name.to_string();
        Ok(())
    }

    /// Removes and returns the attribute.
    pub fn remove_attr(&mut self, attr_name: &str) -> Result<Attribute, InvalidDataSet> {
        let removed_attr_index: usize = self.find_attr_from_name(attr_name)?.0;
        Ok(self.attrs.remove(removed_attr_index))
    }

    /// Finds an attribute from its name, and returns its index and a reference to it.
    pub(in crate::data_set) fn find_attr_from_name(
        &self,
        attr_name: &str,
    ) -> Result<(usize, &Attribute), InvalidDataSet> {
        self.attrs
            .iter()
            .position(|attr| attr.name() == attr_name)
            .map(|index| (index, &self.attrs[index]))
            .ok_or(InvalidDataSet::VariableAttributeNotDefined {
                var_name: self.name.to_string(),
                attr_name: attr_name.to_string(),
            })
    }

    pub(super) fn check_var_name(var_name: &str) -> Result<(), InvalidDataSet> {
        match is_valid_name(var_name) {
            true => Ok(()),
            false => Err(InvalidDataSet::VariableNameNotValid(var_name.to_string())),
        }
    }

    pub(super) fn check_dims_validity(
        var_name: &str,
        dims: &[Rc<Dimension>],
    ) -> Result<(), InvalidDataSet> {
        if dims.is_empty() {
            return Ok(());
        }
        // The optional unlimited dimension is only accepted in the first position
        if let Some(unlim_dim) = dims.iter().skip(1).find(|dim: &&Rc<Dimension>| dim.is_unlimited()) {
            let dim_names: Vec<String> = dims.iter().map(|dim: &Rc<Dimension>| dim.name()).collect();
            return Err(InvalidDataSet::UnlimitedDimensionMustBeDefinedFirst {
                var_name: var_name.to_string(),
                unlim_dim_name: unlim_dim.name(),
                get_dim_names: dim_names,
            });
        }
        // The same dimension must not be used multiple times by the variable
        let mut repeated_dim_names: Vec<String> = vec![];
        for (i, ref_dim_1) in dims.iter().enumerate().skip(1) {
            repeated_dim_names.extend(
                dims.iter()
                    .take(i)
                    .filter(|ref_dim_2: &&Rc<Dimension>| Rc::ptr_eq(ref_dim_1, ref_dim_2))
                    .map(|ref_dim_2: &Rc<Dimension>| ref_dim_2.name()),
            );
        }
        let repeated_dim_names = HashSet::<String>::from_iter(repeated_dim_names.into_iter());
        if !repeated_dim_names.is_empty() {
            let dim_names: Vec<String> = dims.iter().map(|dim: &Rc<Dimension>| dim.name()).collect();
            return Err(InvalidDataSet::DimensionsUsedMultipleTimes {
                var_name: var_name.to_string(),
                get_dim_names: dim_names,
            });
        }
        if dims.len() > NC_MAX_VAR_DIMS {
            return Err(InvalidDataSet::MaximumDimensionsPerVariableExceeded {
                var_name: var_name.to_string(),
                num_dims: dims.len(),
            });
        }
        Ok(())
    }
}
