//! Offset planning pass of the writer.
//!
//! Before any byte is written, the layout planner computes the header size and the
//! absolute `begin` offset of every variable data region, so that the emitted header
//! declarations agree with where the payloads actually land and the writer never needs
//! to seek.

mod tests;

use std::convert::TryFrom;

use crate::io::{padded_size, Offset};
use crate::size;
use crate::{DataSet, Variable, Version, WriteError};

/// Metadata computed for one variable before any byte is written.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VariableLayout {
    /// The ids of the dimensions of the variable.
    pub(crate) dim_ids: Vec<usize>,
    /// The number of bytes of each chunk, padding included (the `vsize` header field).
    pub(crate) chunk_size: usize,
    /// The absolute offset of the first chunk (the `begin` header field).
    pub(crate) begin_offset: Offset,
}

/// Layout of a whole data set.
#[derive(Debug)]
pub(crate) struct DataSetLayout<'a> {
    /// The actual header size, the `header_min_size` reservation and the trailing
    /// padding included.
    pub(crate) header_size: usize,
    /// The number of zero bytes appended after the last variable header.
    pub(crate) header_zero_padding_size: usize,
    /// The number of bytes of one whole record : the sum of the chunk sizes of the
    /// record variables.
    pub(crate) record_stride: usize,
    /// The variables paired with their layouts. *Fixed-size* variables come first, then
    /// the record variables ; the declaration order is preserved within each partition.
    /// This is the on-disk order and the order of the emitted variable headers.
    pub(crate) vars: Vec<(&'a Variable, VariableLayout)>,
}

impl<'a> DataSetLayout<'a> {
    /// Computes the layout of the data set.
    ///
    /// The header is at least `header_min_size` bytes long : the remaining bytes after
    /// the last variable header are reserved as zero padding, so that a data set whose
    /// header may grow can be rewritten later without moving the data regions.
    pub(crate) fn plan(data_set: &'a DataSet, header_min_size: usize) -> Result<DataSetLayout<'a>, WriteError> {
        // Partition the variables : first the fixed-size variables then the record
        // variables, without reordering within each partition.
        let (record_vars, fixed_size_vars): (Vec<&Variable>, Vec<&Variable>) = data_set
            .vars
            .iter()
            .partition(|var: &&Variable| var.is_record_var());
        let partitioned_vars: Vec<&Variable> = fixed_size_vars.into_iter().chain(record_vars).collect();

        let header_required_size: usize = size::header_size(data_set);
        let header_size: usize = padded_size(std::cmp::max(header_min_size, header_required_size));

        let mut begin_offset: usize = header_size;
        let mut record_stride: usize = 0;
        let mut vars: Vec<(&Variable, VariableLayout)> = Vec::with_capacity(partitioned_vars.len());
        for var in partitioned_vars.into_iter() {
            let chunk_size: usize = var.chunk_size();
            if var.is_record_var() {
                record_stride += chunk_size;
            }
            vars.push((
                var,
                VariableLayout {
                    dim_ids: data_set.get_var_dim_ids(&var.name).ok_or(WriteError::Unexpected)?,
                    chunk_size,
                    begin_offset: match &data_set.version {
                        Version::Classic => {
                            let offset: i32 = i32::try_from(begin_offset).map_err(|_err| {
                                WriteError::ClassicOffsetOverflow {
                                    begin_offset: begin_offset as u64,
                                }
                            })?;
                            Offset::I32(offset)
                        }
                        Version::Offset64Bit => Offset::I64(begin_offset as i64),
                    },
                },
            ));
            begin_offset += chunk_size;
        }

        Ok(DataSetLayout {
            header_size,
            header_zero_padding_size: header_size - header_required_size,
            record_stride,
            vars,
        })
    }
}
