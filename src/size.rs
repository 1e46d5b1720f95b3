//! Pure functions computing the on-disk size (number of bytes) of each entity of the
//! data model, and the total header size.

mod tests;

use std::rc::Rc;

use crate::data_values::DataValues;
use crate::io::{padded_size, ABSENT_TAG};
use crate::{Attribute, DataSet, Dimension, Variable, Version};

/// Size of the magic word : the 3 bytes `b"CDF"` plus the version byte.
pub(crate) const MAGIC_WORD_SIZE: usize = 4;

/// Size of the 8-byte prefix of a container list (4-byte type tag + 4-byte element count).
const LIST_PREFIX_SIZE: usize = 8;

/// Returns the size of a length-prefixed padded name.
pub(crate) fn name_string_size(name: &str) -> usize {
    std::mem::size_of::<i32>() + padded_size(name.as_bytes().len())
}

/// Returns the size of a value block, padding included.
pub(crate) fn values_size(values: &DataValues) -> usize {
    padded_size(values.len() * values.data_type().size_of())
}

/// Returns the size of one attribute : its name, its type tag, its element count and
/// its padded value block.
pub(crate) fn attr_size(attr: &Attribute) -> usize {
    name_string_size(attr.name())
        + std::mem::size_of::<i32>()        // the data type tag
        + std::mem::size_of::<i32>()        // the number of elements
        + values_size(attr.values())
}

/// Returns the size of an attribute list (global or of one variable).
pub(crate) fn attrs_list_size(attrs: &[Attribute]) -> usize {
    if attrs.is_empty() {
        return ABSENT_TAG.len();
    }
    LIST_PREFIX_SIZE + attrs.iter().map(attr_size).sum::<usize>()
}

/// Returns the size of one dimension : its name and its length.
pub(crate) fn dim_size(dim: &Rc<Dimension>) -> usize {
    name_string_size(&dim.name()) + std::mem::size_of::<i32>()
}

/// Returns the size of the dimension list.
pub(crate) fn dims_list_size(dims: &[Rc<Dimension>]) -> usize {
    if dims.is_empty() {
        return ABSENT_TAG.len();
    }
    LIST_PREFIX_SIZE + dims.iter().map(dim_size).sum::<usize>()
}

/// Returns the size of one variable header.
///
/// The width of the `begin` field depends on the file version.
pub(crate) fn var_header_size(var: &Variable, version: &Version) -> usize {
    name_string_size(var.name())
        + std::mem::size_of::<i32>()                    // the number of dimensions
        + var.num_dims() * std::mem::size_of::<i32>()   // the dimension ids
        + attrs_list_size(&var.attrs)
        + std::mem::size_of::<i32>()                    // the data type tag
        + std::mem::size_of::<i32>()                    // the chunk size (`vsize`)
        + version.offset_size()                         // the `begin` offset
}

/// Returns the size of the variable list.
pub(crate) fn vars_list_size(vars: &[Variable], version: &Version) -> usize {
    if vars.is_empty() {
        return ABSENT_TAG.len();
    }
    LIST_PREFIX_SIZE
        + vars
            .iter()
            .map(|var: &Variable| var_header_size(var, version))
            .sum::<usize>()
}

/// Returns the size required to write the file header of the data set : the magic word,
/// the number of records, the dimension list, the global attribute list and the
/// variable list.
pub(crate) fn header_size(data_set: &DataSet) -> usize {
    MAGIC_WORD_SIZE
        + std::mem::size_of::<i32>()    // the number of records
        + dims_list_size(&data_set.dims)
        + attrs_list_size(&data_set.attrs)
        + vars_list_size(&data_set.vars, &data_set.version)
}
