mod tests;

use crate::name_string::is_valid_name;
use crate::InvalidDataSet;
use crate::NC_MAX_DIM_SIZE;

use std::cell::RefCell;

/// NetCDF-3 dimension
///
/// `Dimension` instances are managed by the struct [`DataSet`](struct.DataSet.html) and
/// handed out as `Rc<Dimension>` handles. A handle stays valid across unrelated
/// mutations of the data set (renames, other dimensions added or removed) and is
/// invalidated only by the removal of the dimension itself.
///
/// A data set has at most one *unlimited-size* (record) dimension. On disk the record
/// dimension is stored with length 0 and the actual number of records is carried by the
/// `numrecs` header field ([`DataSet::num_records`](struct.DataSet.html#method.num_records)).
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use nc3::{DataSet, Dimension, DimensionType};
///
/// let mut data_set = DataSet::new();
///
/// let x: Rc<Dimension> = data_set.add_dim("x", 10, 1).unwrap();
/// let time: Rc<Dimension> = data_set.add_dim("time", 0, 1).unwrap();   // the record dimension
///
/// assert_eq!("x",                             x.name());
/// assert_eq!(10,                              x.size());
/// assert_eq!(DimensionType::FixedSize,        x.dim_type());
///
/// assert_eq!("time",                          time.name());
/// assert_eq!(0,                               time.size());            // stored as 0 on disk
/// assert_eq!(DimensionType::UnlimitedSize,    time.dim_type());
/// assert_eq!(true,                            time.is_unlimited());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub(crate) name: RefCell<String>,
    pub(crate) size: RefCell<DimensionSize>,
}

/// Internal representation of the size of a dimension.
///
/// Both fields are interior-mutable so that `Rc<Dimension>` handles survive renames and
/// the demotion of the record dimension to a fixed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DimensionSize {
    /// The *unlimited-size* (record) dimension, length 0 on disk.
    Unlimited,
    /// A *fixed-size* dimension.
    Fixed(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(u8)]
/// Type of a dimension, *fixed* or *unlimited* size
pub enum DimensionType {
    UnlimitedSize = 0,
    FixedSize = 1,
}

impl Dimension {
    /// Creates a new *fixed-size* NetCDF-3 dimension.
    pub(crate) fn new_fixed_size(name: &str, size: usize) -> Result<Dimension, InvalidDataSet> {
        Dimension::check_dim_name(name)?;
        Dimension::check_fixed_size(name, size)?;
        Ok(Dimension {
            name: RefCell::new(name.to_string()),
            size: RefCell::new(DimensionSize::Fixed(size)),
        })
    }

    /// Creates a new *unlimited-size* NetCDF-3 dimension.
    pub(crate) fn new_unlimited_size(name: &str) -> Result<Dimension, InvalidDataSet> {
        Dimension::check_dim_name(name)?;
        Ok(Dimension {
            name: RefCell::new(name.to_string()),
            size: RefCell::new(DimensionSize::Unlimited),
        })
    }

    /// Returns the name of the dimension.
    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    /// Returns the length of the dimension.
    ///
    /// The *unlimited-size* dimension returns 0, its on-disk representation ; the
    /// number of records is carried by the data set.
    pub fn size(&self) -> usize {
        match *self.size.borrow() {
            DimensionSize::Unlimited => 0,
            DimensionSize::Fixed(size) => size,
        }
    }

    /// Returns the dimension type (*fixed size* or *unlimited size*).
    pub fn dim_type(&self) -> DimensionType {
        match *self.size.borrow() {
            DimensionSize::Unlimited => DimensionType::UnlimitedSize,
            DimensionSize::Fixed(_) => DimensionType::FixedSize,
        }
    }

    /// Returns `true` if the dimension is the *unlimited-size* dimension.
    pub fn is_unlimited(&self) -> bool {
        self.dim_type() == DimensionType::UnlimitedSize
    }

    /// Returns `true` if the dimension is a *fixed-size* dimension.
    pub fn is_fixed(&self) -> bool {
        self.dim_type() == DimensionType::FixedSize
    }

    /// Turns the *unlimited-size* dimension into a *fixed-size* dimension of `size` elements.
    pub(in crate::data_set) fn demote(&self, size: usize) -> Result<(), InvalidDataSet> {
        Dimension::check_fixed_size(&self.name.borrow(), size)?;
        self.size.replace(DimensionSize::Fixed(size));
        Ok(())
    }

    /// Turns a *fixed-size* dimension into the *unlimited-size* dimension.
    pub(in crate::data_set) fn promote(&self) {
        self.size.replace(DimensionSize::Unlimited);
    }

    pub(in crate::data_set) fn check_dim_name(dim_name: &str) -> Result<(), InvalidDataSet> {
        match is_valid_name(dim_name) {
            true => Ok(()),
            false => Err(InvalidDataSet::DimensionNameNotValid(dim_name.to_string())),
        }
    }

    fn check_fixed_size(dim_name: &str, size: usize) -> Result<(), InvalidDataSet> {
        if size == 0 {
            return Err(InvalidDataSet::FixedDimensionWithZeroSize(dim_name.to_string()));
        }
        if size > NC_MAX_DIM_SIZE {
            return Err(InvalidDataSet::MaximumFixedDimensionSizeExceeded {
                dim_name: dim_name.to_string(),
                get: size,
            });
        }
        Ok(())
    }
}
