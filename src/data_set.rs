mod dimension;
pub use dimension::{Dimension, DimensionType};

mod attribute;
pub use attribute::Attribute;

mod variable;
pub use variable::Variable;

mod tests;

use std::cell::RefMut;
use std::rc::Rc;

use crate::data_values::DataValues;
use crate::{DataType, InvalidDataSet, Version};

/// Default fill value for the `Byte` elements (bit pattern of `NC_FILL_BYTE` defined in the header file [netcdf.h](https://www.unidata.ucar.edu/software/netcdf/docs/netcdf_8h.html))
///
/// ```
/// # use nc3::NC_FILL_BYTE;
/// // Written bytes in the NetCDF-3 files
/// assert_eq!([0x81], NC_FILL_BYTE.to_be_bytes());
/// ```
pub const NC_FILL_BYTE: u8 = 0x81;
/// Default fill value for the `Char` elements (same value as `NC_FILL_CHAR` defined in the header file [netcdf.h](https://www.unidata.ucar.edu/software/netcdf/docs/netcdf_8h.html))
///
/// ```
/// # use nc3::NC_FILL_CHAR;
/// // Written bytes in the NetCDF-3 files
/// assert_eq!([0x00], NC_FILL_CHAR.to_be_bytes());
/// ```
pub const NC_FILL_CHAR: u8 = 0;
/// Default fill value for the `Short` elements (same value as `NC_FILL_SHORT` defined in the header file [netcdf.h](https://www.unidata.ucar.edu/software/netcdf/docs/netcdf_8h.html))
///
/// ```
/// # use nc3::NC_FILL_SHORT;
/// // Written bytes in the NetCDF-3 files
/// assert_eq!([0x80, 0x01], NC_FILL_SHORT.to_be_bytes());
/// ```
pub const NC_FILL_SHORT: i16 = -32767;
/// Default fill value for the `Int` elements (same value as `NC_FILL_INT` defined in the header file [netcdf.h](https://www.unidata.ucar.edu/software/netcdf/docs/netcdf_8h.html))
///
/// ```
/// # use nc3::NC_FILL_INT;
/// // Written bytes in the NetCDF-3 files
/// assert_eq!([0x80, 0x00, 0x00, 0x01], NC_FILL_INT.to_be_bytes());
/// ```
pub const NC_FILL_INT: i32 = -2147483647;
/// Default fill value for the `Float` elements (same value as `NC_FILL_FLOAT` defined in the header file [netcdf.h](https://www.unidata.ucar.edu/software/netcdf/docs/netcdf_8h.html))
///
/// ```
/// # use nc3::NC_FILL_FLOAT;
/// // Written bytes in the NetCDF-3 files
/// assert_eq!([0x7c, 0xf0, 0x00, 0x00], NC_FILL_FLOAT.to_be_bytes());
/// ```
pub const NC_FILL_FLOAT: f32 = 9.9692099683868690e+36;
/// Default fill value for the `Double` elements (same value as `NC_FILL_DOUBLE` defined in the header file [netcdf.h](https://www.unidata.ucar.edu/software/netcdf/docs/netcdf_8h.html))
///
/// ```
/// # use nc3::NC_FILL_DOUBLE;
/// // Written bytes in the NetCDF-3 files
/// assert_eq!([0x47, 0x9e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], NC_FILL_DOUBLE.to_be_bytes());
/// ```
pub const NC_FILL_DOUBLE: f64 = 9.9692099683868690e+36;

/// Maximum length of the *fixed-size* dimensions
pub const NC_MAX_DIM_SIZE: usize = (std::i32::MAX - 3) as usize;

/// Maximum number of dimensions per variable
pub const NC_MAX_VAR_DIMS: usize = 1024;

/// Allows to define the NetCDF-3 data sets
///
/// A `DataSet` owns its dimensions, its global attributes and its variables ; each
/// variable owns its attributes and its data. The data set also carries the file
/// version and the number of records of the record section.
///
/// # Example
///
/// ```
/// use nc3::{DataSet, DataType};
///
/// let mut data_set = DataSet::new();
///
/// // Define the dimensions, `length = 0` defines the unlimited (record) dimension
/// // ----------------------------------------------------------------------------
/// let time = data_set.add_dim("time", 0, 1).unwrap();
/// let latitude = data_set.add_dim("latitude", 180, 1).unwrap();
/// let longitude = data_set.add_dim("longitude", 360, 1).unwrap();
/// data_set.set_num_records(24);
///
/// // Define the global attributes
/// // ----------------------------
/// data_set.add_global_attr_string("title",        "Air temperature measurements").unwrap();
/// data_set.add_global_attr_string("Conventions",  "CF-1.8").unwrap();
///
/// // Define the variables and their attributes
/// // -----------------------------------------
/// data_set.add_var("air_temperature", DataType::Double).unwrap();
/// data_set.redim_var("air_temperature", &[time, latitude, longitude]).unwrap();
/// data_set.add_var_attr_string("air_temperature", "standard_name", "air_temperature").unwrap();
/// data_set.add_var_attr_string("air_temperature", "units", "Celsius").unwrap();
///
/// assert_eq!(3,                       data_set.num_dims());
/// assert_eq!(2,                       data_set.num_global_attrs());
/// assert_eq!(1,                       data_set.num_vars());
/// assert_eq!(Some(true),              data_set.is_record_var("air_temperature"));
/// assert_eq!(Some(24 * 180 * 360),    data_set.var_len("air_temperature"));
/// ```
#[derive(Debug, PartialEq)]
pub struct DataSet {
    pub(crate) version: Version,
    pub(crate) num_records: usize,
    pub(crate) unlimited_dim: Option<Rc<Dimension>>,
    pub(crate) dims: Vec<Rc<Dimension>>,
    pub(crate) attrs: Vec<Attribute>,
    pub(crate) vars: Vec<Variable>,
}

macro_rules! impl_set_typed_var_data {
    ($func_name:ident, $prim_type:ty, $data_values:path) => {
        /// Sets the data of the typed variable (see the [set_var_data](struct.DataSet.html#method.set_var_data) method).
        pub fn $func_name(&mut self, var_name: &str, data: Vec<$prim_type>) -> Result<(), InvalidDataSet> {
            self.set_var_data(var_name, $data_values(data))
        }
    };
}

impl DataSet {
    /// Creates a new empty NetCDF-3 data set (classic version, zero records).
    pub fn new() -> DataSet {
        DataSet {
            version: Version::Classic,
            num_records: 0,
            unlimited_dim: None,
            dims: vec![],
            attrs: vec![],
            vars: vec![],
        }
    }

    /// Returns the file version (classic or 64-bit offset).
    pub fn version(&self) -> Version {
        self.version.clone()
    }

    /// Sets the file version used when the data set is written.
    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    /// Returns the number of records of the record section.
    ///
    /// The value applies uniformly to every record variable.
    pub fn num_records(&self) -> usize {
        self.num_records
    }

    /// Sets the number of records of the record section.
    ///
    /// Must be set before the data of a record variable is supplied : the expected
    /// data length of a record variable is `num_records * chunk_len`.
    pub fn set_num_records(&mut self, num_records: usize) {
        self.num_records = num_records;
    }

    // ----------------------------------------------------------------
    //
    //                          Dimensions
    //
    // ----------------------------------------------------------------

    /// Appends a new dimension in the data set and returns a handle to it.
    ///
    /// A `length` of 0 defines the *unlimited-size* (record) dimension. If another
    /// record dimension was already defined, it is demoted to a *fixed-size* dimension
    /// of `default_record_length` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use nc3::{DataSet, DimensionType};
    ///
    /// let mut data_set = DataSet::new();
    ///
    /// let first = data_set.add_dim("first_record_dim", 0, 10).unwrap();
    /// assert_eq!(DimensionType::UnlimitedSize,    first.dim_type());
    ///
    /// // A second record dimension demotes the first one
    /// let second = data_set.add_dim("second_record_dim", 0, 10).unwrap();
    /// assert_eq!(DimensionType::FixedSize,        first.dim_type());
    /// assert_eq!(10,                              first.size());
    /// assert_eq!(DimensionType::UnlimitedSize,    second.dim_type());
    /// ```
    pub fn add_dim<T: std::convert::AsRef<str>>(
        &mut self,
        dim_name: T,
        length: usize,
        default_record_length: usize,
    ) -> Result<Rc<Dimension>, InvalidDataSet> {
        let dim_name: &str = dim_name.as_ref();
        if self.find_dim_from_name(dim_name).is_some() {
            return Err(InvalidDataSet::DimensionAlreadyExists(dim_name.to_string()));
        }
        if length > 0 {
            let new_dim = Rc::new(Dimension::new_fixed_size(dim_name, length)?);
            self.dims.push(Rc::clone(&new_dim));
            return Ok(new_dim);
        }
        Dimension::check_dim_name(dim_name)?;
        if let Some(prev_unlim_dim) = self.unlimited_dim.take() {
            match prev_unlim_dim.demote(default_record_length) {
                Ok(()) => {}
                Err(err) => {
                    self.unlimited_dim = Some(prev_unlim_dim);
                    return Err(err);
                }
            }
            self.clear_data_of_vars_using(&prev_unlim_dim);
        }
        let new_dim = Rc::new(Dimension::new_unlimited_size(dim_name)?);
        self.dims.push(Rc::clone(&new_dim));
        self.unlimited_dim = Some(Rc::clone(&new_dim));
        Ok(new_dim)
    }

    /// Appends a new *fixed-size* dimension in the data set.
    ///
    /// Returns an error if another dimension with the same name is already defined, or
    /// if `size` is 0 (the record dimension is defined through
    /// [add_dim](struct.DataSet.html#method.add_dim)).
    pub fn add_fixed_dim<T: std::convert::AsRef<str>>(
        &mut self,
        dim_name: T,
        size: usize,
    ) -> Result<Rc<Dimension>, InvalidDataSet> {
        let dim_name: &str = dim_name.as_ref();
        if self.find_dim_from_name(dim_name).is_some() {
            return Err(InvalidDataSet::DimensionAlreadyExists(dim_name.to_string()));
        }
        let new_dim = Rc::new(Dimension::new_fixed_size(dim_name, size)?);
        self.dims.push(Rc::clone(&new_dim));
        Ok(new_dim)
    }

    /// Makes an already defined dimension the *unlimited-size* (record) dimension.
    ///
    /// Any previously record dimension is demoted to a *fixed-size* dimension of
    /// `default_record_length` elements. The data of the variables defined over either
    /// dimension is dropped, their expected length changed.
    ///
    /// Returns an error if :
    ///  1. the handle does not refer to a dimension of this data set
    ///  2. a variable uses the promoted dimension in a non-first position
    ///  3. `default_record_length` is not a valid fixed length while a demotion is required
    pub fn set_unlimited(
        &mut self,
        dim: &Rc<Dimension>,
        default_record_length: usize,
    ) -> Result<(), InvalidDataSet> {
        if !self.dims.iter().any(|defined: &Rc<Dimension>| Rc::ptr_eq(defined, dim)) {
            return Err(InvalidDataSet::DimensionNotDefined(dim.name()));
        }
        if dim.is_unlimited() {
            return Ok(());
        }
        // the record dimension is only accepted as the first dimension of a variable
        if let Some(var) = self
            .vars
            .iter()
            .find(|var: &&Variable| var.dims.iter().skip(1).any(|used| Rc::ptr_eq(used, dim)))
        {
            return Err(InvalidDataSet::UnlimitedDimensionMustBeDefinedFirst {
                var_name: var.name.clone(),
                unlim_dim_name: dim.name(),
                get_dim_names: var.dim_names(),
            });
        }
        if let Some(prev_unlim_dim) = self.unlimited_dim.take() {
            match prev_unlim_dim.demote(default_record_length) {
                Ok(()) => {}
                Err(err) => {
                    self.unlimited_dim = Some(prev_unlim_dim);
                    return Err(err);
                }
            }
            self.clear_data_of_vars_using(&prev_unlim_dim);
        }
        dim.promote();
        self.unlimited_dim = Some(Rc::clone(dim));
        let promoted: Rc<Dimension> = Rc::clone(dim);
        self.clear_data_of_vars_using(&promoted);
        Ok(())
    }

    /// Drops the stale data of the variables defined over the dimension.
    fn clear_data_of_vars_using(&mut self, dim: &Rc<Dimension>) {
        for var in self.vars.iter_mut() {
            if var.dims.iter().any(|used: &Rc<Dimension>| Rc::ptr_eq(used, dim)) {
                var.data = None;
            }
        }
    }

    /// Returns the number of dimensions defined in the data set.
    pub fn num_dims(&self) -> usize {
        self.dims.len()
    }

    /// Returns :
    ///
    ///  - `true` if the dimension is defined.
    ///  - `false` otherwise.
    pub fn has_dim(&self, dim_name: &str) -> bool {
        self.find_dim_from_name(dim_name).is_some()
    }

    /// Returns a handle to the dimension, or `None` if it is not defined.
    pub fn get_dim(&self, dim_name: &str) -> Option<Rc<Dimension>> {
        self.find_dim_from_name(dim_name)
            .map(|(_dim_index, dim): (usize, &Rc<Dimension>)| Rc::clone(dim))
    }

    /// Returns a handle to the dimension at `index`, or `None` if out of range.
    pub fn get_dim_at(&self, index: usize) -> Option<Rc<Dimension>> {
        self.dims.get(index).map(Rc::clone)
    }

    /// Returns the handles of all the dimensions defined in the data set.
    pub fn get_dims(&self) -> Vec<Rc<Dimension>> {
        self.dims.iter().map(Rc::clone).collect()
    }

    /// Returns the names of all the dimensions defined in the data set.
    pub fn dim_names(&self) -> Vec<String> {
        self.dims.iter().map(|dim| dim.name()).collect()
    }

    /// Returns `true` if the *unlimited-size* dimension is defined.
    pub fn has_unlimited_dim(&self) -> bool {
        self.unlimited_dim.is_some()
    }

    /// Returns the *unlimited-size* dimension if it is defined, otherwise returns `None`.
    pub fn get_unlimited_dim(&self) -> Option<Rc<Dimension>> {
        self.unlimited_dim.as_ref().map(Rc::clone)
    }

    /// Returns the length of the dimension, the number of records for the
    /// *unlimited-size* dimension.
    ///
    /// Returns `None` if the dimension does not exist.
    pub fn dim_size(&self, dim_name: &str) -> Option<usize> {
        self.find_dim_from_name(dim_name).map(|(_dim_index, dim)| {
            if dim.is_unlimited() {
                self.num_records
            } else {
                dim.size()
            }
        })
    }

    /// Returns the type of the dimension (*fixed-size* or *unlimited-size*).
    ///
    /// Returns `None` if the dimension does not exist.
    pub fn dim_type(&self, dim_name: &str) -> Option<DimensionType> {
        self.find_dim_from_name(dim_name).map(|(_dim_index, dim)| dim.dim_type())
    }

    /// Removes and returns the dimension.
    ///
    /// Returns an error if :
    ///
    /// - the dimension is not defined
    /// - the dimension is still used by a variable of the data set
    pub fn remove_dim(&mut self, dim_name: &str) -> Result<Rc<Dimension>, InvalidDataSet> {
        let removed_dim_index: usize = match self.find_dim_from_name(dim_name) {
            None => return Err(InvalidDataSet::DimensionNotDefined(dim_name.to_string())),
            Some((index, _)) => index,
        };
        let variables_using_removed_dim: Vec<String> = self
            .vars
            .iter()
            .filter(|var: &&Variable| var.use_dim(dim_name))
            .map(|var: &Variable| var.name.clone())
            .collect();
        if !variables_using_removed_dim.is_empty() {
            return Err(InvalidDataSet::DimensionYetUsed {
                var_names: variables_using_removed_dim,
                dim_name: dim_name.to_string(),
            });
        }

        let removed_dim: Rc<Dimension> = self.dims.remove(removed_dim_index);
        if removed_dim.is_unlimited() {
            self.unlimited_dim = None;
        }
        Ok(removed_dim)
    }

    /// Renames the dimension or returns an error if :
    /// - no dimension named `old_dim_name` exists
    /// - another dimension named `new_dim_name` already exists
    /// - `new_dim_name` is not a valid NetCDF-3 name
    ///
    /// **Nothing is done if `old_dim_name` and `new_dim_name` are the same.**
    pub fn rename_dim(&mut self, old_dim_name: &str, new_dim_name: &str) -> Result<(), InvalidDataSet> {
        if old_dim_name == new_dim_name {
            return Ok(());
        }
        let (_dim_position, renamed_dim): (usize, &Rc<Dimension>) = match self.find_dim_from_name(old_dim_name) {
            None => return Err(InvalidDataSet::DimensionNotDefined(old_dim_name.to_string())),
            Some(found) => found,
        };
        if self.find_dim_from_name(new_dim_name).is_some() {
            return Err(InvalidDataSet::DimensionAlreadyExists(new_dim_name.to_string()));
        }
        Dimension::check_dim_name(new_dim_name)?;

        let mut dim_name: RefMut<String> = renamed_dim.name.borrow_mut();
        *dim_name = new_dim_name.to_string();
        Ok(())
    }

    /// Finds a dimension of the data set from its name.
    fn find_dim_from_name(&self, dim_name: &str) -> Option<(usize, &Rc<Dimension>)> {
        self.dims
            .iter()
            .position(|dim| *dim.name.borrow() == dim_name)
            .map(|index| (index, &self.dims[index]))
    }

    /// Returns the handles of the dimensions located at `dim_ids`.
    ///
    /// Returns an error if any of the ids is out of range.
    pub fn get_dims_from_dim_ids(&self, dim_ids: &[usize]) -> Result<Vec<Rc<Dimension>>, InvalidDataSet> {
        let not_found_dim_ids: Vec<usize> = dim_ids
            .iter()
            .filter(|dim_id: &&usize| self.dims.get(**dim_id).is_none())
            .cloned()
            .collect();
        if !not_found_dim_ids.is_empty() {
            return Err(InvalidDataSet::DimensionIdsNotFound {
                searched: dim_ids.to_vec(),
                not_found: not_found_dim_ids,
            });
        }
        Ok(dim_ids.iter().map(|dim_id: &usize| Rc::clone(&self.dims[*dim_id])).collect())
    }

    /// Returns the ids (positions in the data set) of the dimensions of the variable.
    pub(crate) fn get_var_dim_ids(&self, var_name: &str) -> Option<Vec<usize>> {
        let var: &Variable = self.find_var_from_name(var_name).ok()?.1;
        let var_dim_ids: Vec<usize> = var.dims.iter().map(|var_dim: &Rc<Dimension>| {
            self.dims.iter()
                .position(|data_set_dim: &Rc<Dimension>| Rc::ptr_eq(data_set_dim, var_dim))
                .expect("all the dimensions of a variable are defined in the data set")
        }).collect();
        Some(var_dim_ids)
    }

    // ----------------------------------------------------------------
    //
    //                           Variables
    //
    // ----------------------------------------------------------------

    /// Adds a new scalar variable in the data set.
    ///
    /// The dimensions of the variable are set afterwards with
    /// [redim_var](struct.DataSet.html#method.redim_var).
    ///
    /// # Example
    ///
    /// ```
    /// use nc3::{DataSet, DataType};
    ///
    /// let mut data_set = DataSet::new();
    /// let x = data_set.add_dim("x", 3, 1).unwrap();
    ///
    /// data_set.add_var("temperature", DataType::Double).unwrap();
    /// assert_eq!(Some(1),     data_set.var_len("temperature"));   // scalar
    ///
    /// data_set.redim_var("temperature", &[x]).unwrap();
    /// assert_eq!(Some(3),     data_set.var_len("temperature"));
    /// ```
    pub fn add_var(&mut self, var_name: &str, data_type: DataType) -> Result<(), InvalidDataSet> {
        if self.find_var_from_name(var_name).is_ok() {
            return Err(InvalidDataSet::VariableAlreadyExists(var_name.to_string()));
        }
        self.vars.push(Variable::new(var_name, vec![], data_type)?);
        Ok(())
    }

    /// Adds a new variable defined over already retrieved dimension handles.
    pub(crate) fn add_var_using_dim_refs(
        &mut self,
        var_name: &str,
        var_dims: Vec<Rc<Dimension>>,
        data_type: DataType,
    ) -> Result<&Variable, InvalidDataSet> {
        if self.find_var_from_name(var_name).is_ok() {
            return Err(InvalidDataSet::VariableAlreadyExists(var_name.to_string()));
        }
        self.vars.push(Variable::new(var_name, var_dims, data_type)?);
        Ok(self.vars.last().unwrap())
    }

    /// Replaces the dimensions of the variable.
    ///
    /// Every handle must refer to a dimension of this data set ; the usual variable
    /// shape rules apply (the unlimited dimension first, each dimension used once, at
    /// most [`NC_MAX_VAR_DIMS`](constant.NC_MAX_VAR_DIMS.html) dimensions). Any data
    /// already supplied for the variable is dropped, its expected length changed.
    pub fn redim_var(&mut self, var_name: &str, dims: &[Rc<Dimension>]) -> Result<(), InvalidDataSet> {
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        for dim in dims.iter() {
            if !self.dims.iter().any(|defined: &Rc<Dimension>| Rc::ptr_eq(defined, dim)) {
                return Err(InvalidDataSet::DimensionNotDefined(dim.name()));
            }
        }
        Variable::check_dims_validity(var_name, dims)?;
        let var: &mut Variable = &mut self.vars[var_index];
        var.dims = dims.to_vec();
        var.data = None;
        Ok(())
    }

    /// Returns the number of defined variables.
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Returns :
    ///  - `true` if the variable is defined.
    ///  - `false` otherwise.
    pub fn has_var(&self, var_name: &str) -> bool {
        self.find_var_from_name(var_name).is_ok()
    }

    /// Returns `true` if the variable is a record variable, or `None` if it is not defined.
    pub fn is_record_var(&self, var_name: &str) -> Option<bool> {
        self.find_var_from_name(var_name)
            .map(|(_var_index, var): (usize, &Variable)| var.is_record_var())
            .ok()
    }

    /// Returns the length (total number of elements) of the variable.
    ///
    /// A record variable has `num_records * chunk_len` elements.
    pub fn var_len(&self, var_name: &str) -> Option<usize> {
        self.find_var_from_name(var_name)
            .map(|(_var_index, var): (usize, &Variable)| {
                let num_chunks: usize = if var.is_record_var() { self.num_records } else { 1 };
                num_chunks * var.chunk_len()
            })
            .ok()
    }

    /// Returns the data type of the variable, or `None`.
    pub fn var_data_type(&self, var_name: &str) -> Option<DataType> {
        self.find_var_from_name(var_name)
            .map(|(_var_index, var): (usize, &Variable)| var.data_type())
            .ok()
    }

    /// Returns a reference to the variable, or `None`.
    pub fn get_var(&self, var_name: &str) -> Option<&Variable> {
        self.find_var_from_name(var_name)
            .map(|(_var_index, var): (usize, &Variable)| var)
            .ok()
    }

    /// Returns a mutable reference to the variable, or `None`.
    pub fn get_var_mut(&mut self, var_name: &str) -> Option<&mut Variable> {
        self.find_var_from_name(var_name)
            .map(|(var_index, _ref_var)| var_index)
            .map(move |var_index: usize| &mut self.vars[var_index])
            .ok()
    }

    /// Returns the references of all the variables defined in the data set.
    pub fn get_vars(&self) -> Vec<&Variable> {
        self.vars.iter().collect()
    }

    /// Returns the names of all the variables defined in the data set.
    pub fn get_var_names(&self) -> Vec<String> {
        self.vars.iter().map(|var: &Variable| var.name().to_string()).collect()
    }

    /// Renames a variable.
    ///
    /// Nothing is done if `old_var_name` and `new_var_name` are the same.
    ///
    /// Returns an error if :
    /// - no variable `old_var_name` exists
    /// - another variable `new_var_name` already exists
    /// - `new_var_name` is not a valid NetCDF-3 name
    pub fn rename_var(&mut self, old_var_name: &str, new_var_name: &str) -> Result<(), InvalidDataSet> {
        if old_var_name == new_var_name {
            return Ok(());
        }
        let renamed_var_index: usize = self.find_var_from_name(old_var_name)?.0;
        if self.find_var_from_name(new_var_name).is_ok() {
            return Err(InvalidDataSet::VariableAlreadyExists(new_var_name.to_string()));
        }
        Variable::check_var_name(new_var_name)?;
        self.vars[renamed_var_index].name = new_var_name.to_string();
        Ok(())
    }

    /// Removes and returns the variable.
    pub fn remove_var(&mut self, var_name: &str) -> Result<Variable, InvalidDataSet> {
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        Ok(self.vars.remove(var_index))
    }

    /// Finds a variable from its name, and returns a tuple containing :
    ///
    /// - 0 : the index of the variable
    /// - 1 : a reference to the variable
    pub(crate) fn find_var_from_name(&self, var_name: &str) -> Result<(usize, &Variable), InvalidDataSet> {
        self.vars
            .iter()
            .position(|var: &Variable| var.name == var_name)
            .map(|var_index| (var_index, &self.vars[var_index]))
            .ok_or(InvalidDataSet::VariableNotDefined(var_name.to_string()))
    }

    // ----------------------------------------------------------------
    //
    //                       Variable data
    //
    // ----------------------------------------------------------------

    /// Sets the data of the variable.
    ///
    /// Returns an error if :
    /// - the variable is not defined
    /// - the values do not have the data type declared by the variable
    /// - the number of elements is not `chunk_len` (fixed-size variable) or
    ///   `num_records * chunk_len` (record variable)
    ///
    /// # Example
    ///
    /// ```
    /// use nc3::{DataSet, DataType, DataValues};
    ///
    /// let mut data_set = DataSet::new();
    /// let x = data_set.add_dim("x", 3, 1).unwrap();
    /// data_set.add_var("var_1", DataType::Int).unwrap();
    /// data_set.redim_var("var_1", &[x]).unwrap();
    ///
    /// data_set.set_var_data("var_1", DataValues::Int(vec![1, 2, 3])).unwrap();
    /// assert_eq!(Some(&[1_i32, 2, 3][..]),    data_set.get_var("var_1").unwrap().data().unwrap().get_int());
    /// ```
    pub fn set_var_data(&mut self, var_name: &str, data: DataValues) -> Result<(), InvalidDataSet> {
        let num_records: usize = self.num_records;
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        let var: &Variable = &self.vars[var_index];
        if var.data_type != data.data_type() {
            return Err(InvalidDataSet::VariableMismatchDataType {
                var_name: var_name.to_string(),
                req: var.data_type(),
                get: data.data_type(),
            });
        }
        let num_chunks: usize = if var.is_record_var() { num_records } else { 1 };
        let req_len: usize = num_chunks * var.chunk_len();
        if data.len() != req_len {
            return Err(InvalidDataSet::VariableMismatchDataLength {
                var_name: var_name.to_string(),
                req: req_len,
                get: data.len(),
            });
        }
        self.vars[var_index].data = Some(data);
        Ok(())
    }

    impl_set_typed_var_data!(set_var_data_byte, u8, DataValues::Byte);
    impl_set_typed_var_data!(set_var_data_char, u8, DataValues::Char);
    impl_set_typed_var_data!(set_var_data_short, i16, DataValues::Short);
    impl_set_typed_var_data!(set_var_data_int, i32, DataValues::Int);
    impl_set_typed_var_data!(set_var_data_float, f32, DataValues::Float);
    impl_set_typed_var_data!(set_var_data_double, f64, DataValues::Double);

    /// Returns the data of the variable, or `None` if the variable is not defined or
    /// its data has not been supplied.
    pub fn var_data(&self, var_name: &str) -> Option<&DataValues> {
        self.find_var_from_name(var_name).ok()?.1.data()
    }

    // ----------------------------------------------------------------
    //
    //                  Variable attributes
    //
    // ----------------------------------------------------------------

    /// Adds a `Byte` attribute in the variable.
    pub fn add_var_attr_byte(&mut self, var_name: &str, attr_name: &str, data: Vec<u8>) -> Result<(), InvalidDataSet> {
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        self.vars[var_index].add_attr_byte(attr_name, data)
    }

    /// Adds a `Char` attribute in the variable from raw octets.
    pub fn add_var_attr_char(&mut self, var_name: &str, attr_name: &str, data: Vec<u8>) -> Result<(), InvalidDataSet> {
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        self.vars[var_index].add_attr_char(attr_name, data)
    }

    /// Adds a `Char` attribute in the variable from a UTF-8 `String`.
    pub fn add_var_attr_string<T: AsRef<str>>(&mut self, var_name: &str, attr_name: &str, data: T) -> Result<(), InvalidDataSet> {
        self.add_var_attr_char(var_name, attr_name, String::from(data.as_ref()).into_bytes())
    }

    /// Adds a `Short` attribute in the variable.
    pub fn add_var_attr_short(&mut self, var_name: &str, attr_name: &str, data: Vec<i16>) -> Result<(), InvalidDataSet> {
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        self.vars[var_index].add_attr_short(attr_name, data)
    }

    /// Adds an `Int` attribute in the variable.
    pub fn add_var_attr_int(&mut self, var_name: &str, attr_name: &str, data: Vec<i32>) -> Result<(), InvalidDataSet> {
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        self.vars[var_index].add_attr_int(attr_name, data)
    }

    /// Adds a `Float` attribute in the variable.
    pub fn add_var_attr_float(&mut self, var_name: &str, attr_name: &str, data: Vec<f32>) -> Result<(), InvalidDataSet> {
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        self.vars[var_index].add_attr_float(attr_name, data)
    }

    /// Adds a `Double` attribute in the variable.
    pub fn add_var_attr_double(&mut self, var_name: &str, attr_name: &str, data: Vec<f64>) -> Result<(), InvalidDataSet> {
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        self.vars[var_index].add_attr_double(attr_name, data)
    }

    /// Returns a reference to the variable attribute.
    pub fn get_var_attr(&self, var_name: &str, attr_name: &str) -> Option<&Attribute> {
        self.find_var_from_name(var_name).ok()?.1.get_attr(attr_name)
    }

    /// Returns the length (number of elements) of the variable attribute.
    pub fn get_var_attr_len(&self, var_name: &str, attr_name: &str) -> Option<usize> {
        self.get_var_attr(var_name, attr_name).map(|attr: &Attribute| attr.len())
    }

    /// Returns the data type of the variable attribute.
    pub fn get_var_attr_data_type(&self, var_name: &str, attr_name: &str) -> Option<DataType> {
        self.get_var_attr(var_name, attr_name).map(|attr: &Attribute| attr.data_type())
    }

    /// Returns all the attributes of the variable.
    ///
    /// Returns `None` if the variable is not defined.
    pub fn get_var_attrs(&self, var_name: &str) -> Option<Vec<&Attribute>> {
        self.find_var_from_name(var_name)
            .map(|(_var_index, var): (usize, &Variable)| var.get_attrs())
            .ok()
    }

    /// Returns :
    ///
    ///  - `true` if the variable attribute is defined.
    ///  - `false` otherwise.
    pub fn has_var_attr(&self, var_name: &str, attr_name: &str) -> Option<bool> {
        self.find_var_from_name(var_name)
            .map(|(_var_index, var): (usize, &Variable)| var.has_attr(attr_name))
            .ok()
    }

    /// Returns the number of attributes of the variable.
    ///
    /// Returns `None` if the variable does not exist.
    pub fn num_var_attrs(&self, var_name: &str) -> Option<usize> {
        self.find_var_from_name(var_name)
            .map(|(_var_index, var): (usize, &Variable)| var.num_attrs())
            .ok()
    }

    /// Renames the variable attribute.
    pub fn rename_var_attr(&mut self, var_name: &str, old_attr_name: &str, new_attr_name: &str) -> Result<(), InvalidDataSet> {
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        self.vars[var_index].rename_attr(old_attr_name, new_attr_name)
    }

    /// Removes the attribute from the variable.
    pub fn remove_var_attr(&mut self, var_name: &str, attr_name: &str) -> Result<Attribute, InvalidDataSet> {
        let var_index: usize = self.find_var_from_name(var_name)?.0;
        self.vars[var_index].remove_attr(attr_name)
    }

    /// Returns the attribute value as a `&[u8]` (see [Attribute::get_byte](struct.Attribute.html#method.get_byte)).
    pub fn get_var_attr_byte(&self, var_name: &str, attr_name: &str) -> Option<&[u8]> {
        self.get_var_attr(var_name, attr_name)?.get_byte()
    }

    /// Returns the attribute octets as a `&[u8]` (see [Attribute::get_char](struct.Attribute.html#method.get_char)).
    pub fn get_var_attr_char(&self, var_name: &str, attr_name: &str) -> Option<&[u8]> {
        self.get_var_attr(var_name, attr_name)?.get_char()
    }

    /// Returns the attribute value as a `String` (see [Attribute::get_as_string](struct.Attribute.html#method.get_as_string)).
    pub fn get_var_attr_as_string(&self, var_name: &str, attr_name: &str) -> Option<String> {
        self.get_var_attr(var_name, attr_name)?.get_as_string()
    }

    /// Returns the attribute value as a `&[i16]` (see [Attribute::get_short](struct.Attribute.html#method.get_short)).
    pub fn get_var_attr_short(&self, var_name: &str, attr_name: &str) -> Option<&[i16]> {
        self.get_var_attr(var_name, attr_name)?.get_short()
    }

    /// Returns the attribute value as a `&[i32]` (see [Attribute::get_int](struct.Attribute.html#method.get_int)).
    pub fn get_var_attr_int(&self, var_name: &str, attr_name: &str) -> Option<&[i32]> {
        self.get_var_attr(var_name, attr_name)?.get_int()
    }

    /// Returns the attribute value as a `&[f32]` (see [Attribute::get_float](struct.Attribute.html#method.get_float)).
    pub fn get_var_attr_float(&self, var_name: &str, attr_name: &str) -> Option<&[f32]> {
        self.get_var_attr(var_name, attr_name)?.get_float()
    }

    /// Returns the attribute value as a `&[f64]` (see [Attribute::get_double](struct.Attribute.html#method.get_double)).
    pub fn get_var_attr_double(&self, var_name: &str, attr_name: &str) -> Option<&[f64]> {
        self.get_var_attr(var_name, attr_name)?.get_double()
    }

    // ----------------------------------------------------------------
    //
    //                  Global attributes
    //
    // ----------------------------------------------------------------

    fn find_global_attr_from_name(&self, attr_name: &str) -> Result<(usize, &Attribute), InvalidDataSet> {
        self.attrs
            .iter()
            .position(|ref_attr: &Attribute| ref_attr.name == attr_name)
            .map(|attr_index: usize| (attr_index, &self.attrs[attr_index]))
            .ok_or(InvalidDataSet::GlobalAttributeNotDefined(attr_name.to_string()))
    }

    /// Appends a global attribute after the usual checks.
    fn push_global_attr(&mut self, attr_name: &str, values: DataValues) -> Result<(), InvalidDataSet> {
        if self.find_global_attr_from_name(attr_name).is_ok() {
            return Err(InvalidDataSet::GlobalAttributeAlreadyExists(attr_name.to_string()));
        }
        let attr: Attribute = Attribute::new(attr_name, values)
            .map_err(|invalid_attr_name: String| InvalidDataSet::GlobalAttributeNameNotValid(invalid_attr_name))?;
        self.attrs.push(attr);
        Ok(())
    }

    /// Adds a global `Byte` attribute in the data set.
    pub fn add_global_attr_byte(&mut self, attr_name: &str, data: Vec<u8>) -> Result<(), InvalidDataSet> {
        self.push_global_attr(attr_name, DataValues::Byte(data))
    }

    /// Adds a global `Char` attribute in the data set from raw octets.
    pub fn add_global_attr_char(&mut self, attr_name: &str, data: Vec<u8>) -> Result<(), InvalidDataSet> {
        self.push_global_attr(attr_name, DataValues::Char(data))
    }

    /// Adds a global `Char` attribute in the data set from a UTF-8 `String`.
    pub fn add_global_attr_string<T: AsRef<str>>(&mut self, attr_name: &str, data: T) -> Result<(), InvalidDataSet> {
        self.add_global_attr_char(attr_name, String::from(data.as_ref()).into_bytes())
    }

    /// Adds a global `Short` attribute in the data set.
    pub fn add_global_attr_short(&mut self, attr_name: &str, data: Vec<i16>) -> Result<(), InvalidDataSet> {
        self.push_global_attr(attr_name, DataValues::Short(data))
    }

    /// Adds a global `Int` attribute in the data set.
    pub fn add_global_attr_int(&mut self, attr_name: &str, data: Vec<i32>) -> Result<(), InvalidDataSet> {
        self.push_global_attr(attr_name, DataValues::Int(data))
    }

    /// Adds a global `Float` attribute in the data set.
    pub fn add_global_attr_float(&mut self, attr_name: &str, data: Vec<f32>) -> Result<(), InvalidDataSet> {
        self.push_global_attr(attr_name, DataValues::Float(data))
    }

    /// Adds a global `Double` attribute in the data set.
    pub fn add_global_attr_double(&mut self, attr_name: &str, data: Vec<f64>) -> Result<(), InvalidDataSet> {
        self.push_global_attr(attr_name, DataValues::Double(data))
    }

    /// Returns a reference to the global attribute.
    pub fn get_global_attr(&self, attr_name: &str) -> Option<&Attribute> {
        self.find_global_attr_from_name(attr_name)
            .ok()
            .map(|(_attr_index, ref_attr)| ref_attr)
    }

    /// Returns the references of all the global attributes.
    pub fn get_global_attrs(&self) -> Vec<&Attribute> {
        self.attrs.iter().collect()
    }

    /// Returns the length (number of elements) of the global attribute.
    pub fn get_global_attr_len(&self, attr_name: &str) -> Option<usize> {
        self.get_global_attr(attr_name).map(|attr: &Attribute| attr.len())
    }

    /// Returns the data type of the global attribute.
    pub fn get_global_attr_data_type(&self, attr_name: &str) -> Option<DataType> {
        self.get_global_attr(attr_name).map(|attr: &Attribute| attr.data_type())
    }

    /// Returns the number of global attributes.
    pub fn num_global_attrs(&self) -> usize {
        self.attrs.len()
    }

    /// Returns :
    ///  - `true` if the global attribute is defined.
    ///  - `false` otherwise.
    pub fn has_global_attr(&self, attr_name: &str) -> bool {
        self.find_global_attr_from_name(attr_name).is_ok()
    }

    /// Returns the names of all the global attributes.
    pub fn get_global_attr_names(&self) -> Vec<String> {
        self.attrs.iter().map(|attr: &Attribute| attr.name().to_string()).collect()
    }

    /// Renames the global attribute.
    pub fn rename_global_attr(&mut self, old_attr_name: &str, new_attr_name: &str) -> Result<(), InvalidDataSet> {
        if old_attr_name == new_attr_name {
            return Ok(());
        }
        let renamed_attr_index: usize = self.find_global_attr_from_name(old_attr_name)?.0;
        if self.find_global_attr_from_name(new_attr_name).is_ok() {
            return Err(InvalidDataSet::GlobalAttributeAlreadyExists(new_attr_name.to_string()));
        }
        Attribute::check_attr_name(new_attr_name)
            .map_err(|invalid_attr_name: String| InvalidDataSet::GlobalAttributeNameNotValid(invalid_attr_name))?;
        self.attrs[renamed_attr_index].name = new_attr_name.to_string();
        Ok(())
    }

    /// Removes and returns the global attribute.
    pub fn remove_global_attr(&mut self, attr_name: &str) -> Result<Attribute, InvalidDataSet> {
        let removed_attr_index: usize = self.find_global_attr_from_name(attr_name)?.0;
        Ok(self.attrs.remove(removed_attr_index))
    }

    /// Returns the attribute value as a `&[u8]` (see [Attribute::get_byte](struct.Attribute.html#method.get_byte)).
    pub fn get_global_attr_byte(&self, attr_name: &str) -> Option<&[u8]> {
        self.get_global_attr(attr_name)?.get_byte()
    }

    /// Returns the attribute octets as a `&[u8]` (see [Attribute::get_char](struct.Attribute.html#method.get_char)).
    pub fn get_global_attr_char(&self, attr_name: &str) -> Option<&[u8]> {
        self.get_global_attr(attr_name)?.get_char()
    }

    /// Returns the attribute value as a `String` (see [Attribute::get_as_string](struct.Attribute.html#method.get_as_string)).
    pub fn get_global_attr_as_string(&self, attr_name: &str) -> Option<String> {
        self.get_global_attr(attr_name)?.get_as_string()
    }

    /// Returns the attribute value as a `&[i16]` (see [Attribute::get_short](struct.Attribute.html#method.get_short)).
    pub fn get_global_attr_short(&self, attr_name: &str) -> Option<&[i16]> {
        self.get_global_attr(attr_name)?.get_short()
    }

    /// Returns the attribute value as a `&[i32]` (see [Attribute::get_int](struct.Attribute.html#method.get_int)).
    pub fn get_global_attr_int(&self, attr_name: &str) -> Option<&[i32]> {
        self.get_global_attr(attr_name)?.get_int()
    }

    /// Returns the attribute value as a `&[f32]` (see [Attribute::get_float](struct.Attribute.html#method.get_float)).
    pub fn get_global_attr_float(&self, attr_name: &str) -> Option<&[f32]> {
        self.get_global_attr(attr_name)?.get_float()
    }

    /// Returns the attribute value as a `&[f64]` (see [Attribute::get_double](struct.Attribute.html#method.get_double)).
    pub fn get_global_attr_double(&self, attr_name: &str) -> Option<&[f64]> {
        self.get_global_attr(attr_name)?.get_double()
    }

    /// Returns the size (number of bytes) of each record stored in the data file : the
    /// sum of the chunk sizes of the record variables.
    ///
    /// Returns `None` if the data set has no *unlimited-size* dimension.
    ///
    /// # Example
    ///
    /// ```
    /// use nc3::{DataSet, DataType};
    ///
    /// let mut data_set = DataSet::new();
    /// assert_eq!(None,        data_set.record_size());
    ///
    /// // The unlimited dimension is defined here, but no variable uses it yet
    /// let time = data_set.add_dim("time", 0, 1).unwrap();
    /// assert_eq!(Some(0),     data_set.record_size());
    ///
    /// // 1 useful byte and 3 zero-padding bytes per record
    /// data_set.add_var("var_byte", DataType::Byte).unwrap();
    /// data_set.redim_var("var_byte", &[time.clone()]).unwrap();
    /// assert_eq!(Some(4),     data_set.record_size());
    ///
    /// // 8 more useful bytes per record
    /// data_set.add_var("var_double", DataType::Double).unwrap();
    /// data_set.redim_var("var_double", &[time]).unwrap();
    /// assert_eq!(Some(12),    data_set.record_size());
    /// ```
    pub fn record_size(&self) -> Option<usize> {
        if !self.has_unlimited_dim() {
            return None;
        }
        Some(
            self.vars
                .iter()
                .filter(|var: &&Variable| var.is_record_var())
                .map(|var: &Variable| var.chunk_size())
                .sum(),
        )
    }
}
