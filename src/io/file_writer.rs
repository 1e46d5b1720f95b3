mod tests_file_writer;

use std::io::Write;
use std::path::Path;

use log::debug;

use crate::data_values::DataValues;
use crate::error::WriteError;
use crate::io::{compute_padding_size, Offset, ABSENT_TAG, ATTRIBUTE_TAG, DIMENSION_TAG, VARIABLE_TAG};
use crate::layout::{DataSetLayout, VariableLayout};
use crate::{Attribute, DataSet, DataType, Variable};

use crate::{NC_FILL_BYTE, NC_FILL_CHAR, NC_FILL_DOUBLE, NC_FILL_FLOAT, NC_FILL_INT, NC_FILL_SHORT};

macro_rules! impl_write_typed_chunk {
    ($func_name:ident, $prim_type:ty) => {
        /// Writes the big-endian bytes of the slice, then the zero padding bytes.
        fn $func_name<T: Write>(out_stream: &mut T, slice: &[$prim_type]) -> Result<usize, std::io::Error> {
            for value in slice.iter() {
                out_stream.write_all(&value.to_be_bytes())?;
            }
            let mut num_bytes: usize = slice.len() * std::mem::size_of::<$prim_type>();

            let padding_size: usize = compute_padding_size(num_bytes);
            if padding_size > 0 {
                out_stream.write_all(&[0_u8; 4][..padding_size])?;
                num_bytes += padding_size;
            }
            Ok(num_bytes)
        }
    };
}

macro_rules! impl_write_typed_chunk_nc_fill {
    ($func_name:ident, $prim_type:ty, $nc_fill_value:ident) => {
        /// Fills one chunk with the default fill value, then the zero padding bytes.
        fn $func_name<T: Write>(out_stream: &mut T, num_values: usize) -> Result<usize, std::io::Error> {
            let bytes: [u8; std::mem::size_of::<$prim_type>()] = $nc_fill_value.to_be_bytes();
            for _ in 0..num_values {
                out_stream.write_all(&bytes)?;
            }
            let mut num_bytes: usize = num_values * std::mem::size_of::<$prim_type>();

            let padding_size: usize = compute_padding_size(num_bytes);
            if padding_size > 0 {
                out_stream.write_all(&[0_u8; 4][..padding_size])?;
                num_bytes += padding_size;
            }
            Ok(num_bytes)
        }
    };
}

impl_write_typed_chunk!(write_chunk_byte, u8);
impl_write_typed_chunk!(write_chunk_char, u8);
impl_write_typed_chunk!(write_chunk_short, i16);
impl_write_typed_chunk!(write_chunk_int, i32);
impl_write_typed_chunk!(write_chunk_float, f32);
impl_write_typed_chunk!(write_chunk_double, f64);

impl_write_typed_chunk_nc_fill!(write_chunk_nc_fill_byte, u8, NC_FILL_BYTE);
impl_write_typed_chunk_nc_fill!(write_chunk_nc_fill_char, u8, NC_FILL_CHAR);
impl_write_typed_chunk_nc_fill!(write_chunk_nc_fill_short, i16, NC_FILL_SHORT);
impl_write_typed_chunk_nc_fill!(write_chunk_nc_fill_int, i32, NC_FILL_INT);
impl_write_typed_chunk_nc_fill!(write_chunk_nc_fill_float, f32, NC_FILL_FLOAT);
impl_write_typed_chunk_nc_fill!(write_chunk_nc_fill_double, f64, NC_FILL_DOUBLE);

/// Writes one chunk taken at `chunk_index` from the value vector, or one chunk of
/// default fill values when no data has been supplied.
fn write_chunk<T: Write>(
    out_stream: &mut T,
    var: &Variable,
    chunk_index: usize,
) -> Result<usize, std::io::Error> {
    let chunk_len: usize = var.chunk_len();
    let start: usize = chunk_index * chunk_len;
    let end: usize = start + chunk_len;
    match var.data() {
        None => match var.data_type() {
            DataType::Byte => write_chunk_nc_fill_byte(out_stream, chunk_len),
            DataType::Char => write_chunk_nc_fill_char(out_stream, chunk_len),
            DataType::Short => write_chunk_nc_fill_short(out_stream, chunk_len),
            DataType::Int => write_chunk_nc_fill_int(out_stream, chunk_len),
            DataType::Float => write_chunk_nc_fill_float(out_stream, chunk_len),
            DataType::Double => write_chunk_nc_fill_double(out_stream, chunk_len),
        },
        Some(values) => match values {
            DataValues::Byte(data) => write_chunk_byte(out_stream, &data[start..end]),
            DataValues::Char(data) => write_chunk_char(out_stream, &data[start..end]),
            DataValues::Short(data) => write_chunk_short(out_stream, &data[start..end]),
            DataValues::Int(data) => write_chunk_int(out_stream, &data[start..end]),
            DataValues::Float(data) => write_chunk_float(out_stream, &data[start..end]),
            DataValues::Double(data) => write_chunk_double(out_stream, &data[start..end]),
        },
    }
}

/// Writes a length-prefixed name, then the zero padding bytes.
fn write_name_string<T: Write>(out_stream: &mut T, name: &str) -> Result<usize, std::io::Error> {
    let name_bytes: &[u8] = name.as_bytes();
    let mut num_bytes: usize = 0;

    // The number of useful bytes
    let bytes: [u8; 4] = (name_bytes.len() as i32).to_be_bytes();
    out_stream.write_all(&bytes)?;
    num_bytes += bytes.len();
    // The name itself
    out_stream.write_all(name_bytes)?;
    num_bytes += name_bytes.len();
    // The zero padding bytes
    let zero_padding_size: usize = compute_padding_size(name_bytes.len());
    if zero_padding_size > 0 {
        out_stream.write_all(&[0_u8; 4][..zero_padding_size])?;
        num_bytes += zero_padding_size;
    }

    Ok(num_bytes)
}

fn write_data_type<T: Write>(out_stream: &mut T, data_type: DataType) -> Result<usize, std::io::Error> {
    let bytes: [u8; 4] = (data_type as i32).to_be_bytes();
    out_stream.write_all(&bytes)?;
    Ok(bytes.len())
}

fn write_dims_list<T: Write>(out_stream: &mut T, data_set: &DataSet) -> Result<usize, std::io::Error> {
    let mut num_bytes: usize = 0;
    if data_set.dims.is_empty() {
        out_stream.write_all(&ABSENT_TAG)?;
        num_bytes += ABSENT_TAG.len();
        return Ok(num_bytes);
    }
    out_stream.write_all(&DIMENSION_TAG)?;
    num_bytes += DIMENSION_TAG.len();

    let bytes: [u8; 4] = (data_set.dims.len() as i32).to_be_bytes();
    out_stream.write_all(&bytes)?;
    num_bytes += bytes.len();

    for dim in data_set.dims.iter() {
        num_bytes += write_name_string(out_stream, &dim.name())?;
        // the unlimited dimension is recorded as 0
        let bytes: [u8; 4] = (dim.size() as i32).to_be_bytes();
        out_stream.write_all(&bytes)?;
        num_bytes += bytes.len();
    }
    Ok(num_bytes)
}

fn write_attrs_list<T: Write>(out_stream: &mut T, attrs_list: &[Attribute]) -> Result<usize, std::io::Error> {
    fn write_attr<T: Write>(out_stream: &mut T, attr: &Attribute) -> Result<usize, std::io::Error> {
        // The name of the attribute
        let mut num_bytes: usize = write_name_string(out_stream, &attr.name)?;
        // The data type of the attribute
        num_bytes += write_data_type(out_stream, attr.data_type())?;
        // The number of elements
        let bytes: [u8; 4] = (attr.len() as i32).to_be_bytes();
        out_stream.write_all(&bytes)?;
        num_bytes += bytes.len();
        // The value block of the attribute
        num_bytes += match &attr.values {
            DataValues::Byte(data) => write_chunk_byte(out_stream, data)?,
            DataValues::Char(data) => write_chunk_char(out_stream, data)?,
            DataValues::Short(data) => write_chunk_short(out_stream, data)?,
            DataValues::Int(data) => write_chunk_int(out_stream, data)?,
            DataValues::Float(data) => write_chunk_float(out_stream, data)?,
            DataValues::Double(data) => write_chunk_double(out_stream, data)?,
        };
        Ok(num_bytes)
    }

    let mut num_bytes: usize = 0;
    if attrs_list.is_empty() {
        out_stream.write_all(&ABSENT_TAG)?;
        num_bytes += ABSENT_TAG.len();
        return Ok(num_bytes);
    }
    out_stream.write_all(&ATTRIBUTE_TAG)?;
    num_bytes += ATTRIBUTE_TAG.len();

    let bytes: [u8; 4] = (attrs_list.len() as i32).to_be_bytes();
    out_stream.write_all(&bytes)?;
    num_bytes += bytes.len();

    for attr in attrs_list {
        num_bytes += write_attr(out_stream, attr)?;
    }
    Ok(num_bytes)
}

fn write_vars_list<T: Write>(
    out_stream: &mut T,
    vars_layout_list: &[(&Variable, VariableLayout)],
) -> Result<usize, std::io::Error> {
    fn write_var<T: Write>(
        out_stream: &mut T,
        var: &Variable,
        var_layout: &VariableLayout,
    ) -> Result<usize, std::io::Error> {
        // The name of the variable
        let mut num_bytes: usize = write_name_string(out_stream, &var.name)?;
        // The number of dimensions
        let mut bytes: [u8; 4] = (var.num_dims() as i32).to_be_bytes();
        out_stream.write_all(&bytes)?;
        num_bytes += bytes.len();
        // The id of each dimension of the variable
        for dim_id in var_layout.dim_ids.iter() {
            bytes = (*dim_id as i32).to_be_bytes();
            out_stream.write_all(&bytes)?;
            num_bytes += bytes.len();
        }
        // The variable attributes
        num_bytes += write_attrs_list(out_stream, &var.attrs)?;
        // The data type of the variable
        num_bytes += write_data_type(out_stream, var.data_type())?;
        // The chunk size (`vsize`), indeterminate when it does not fit the 32-bit field
        bytes = {
            let chunk_size: u32 = if var_layout.chunk_size > (std::i32::MAX as usize) {
                std::u32::MAX
            } else {
                var_layout.chunk_size as u32
            };
            chunk_size.to_be_bytes()
        };
        out_stream.write_all(&bytes)?;
        num_bytes += bytes.len();
        // The `begin` offset
        match var_layout.begin_offset {
            Offset::I32(begin_offset) => {
                let bytes: [u8; 4] = begin_offset.to_be_bytes();
                out_stream.write_all(&bytes)?;
                num_bytes += bytes.len();
            }
            Offset::I64(begin_offset) => {
                let bytes: [u8; 8] = begin_offset.to_be_bytes();
                out_stream.write_all(&bytes)?;
                num_bytes += bytes.len();
            }
        }
        Ok(num_bytes)
    }

    let mut num_bytes: usize = 0;
    if vars_layout_list.is_empty() {
        out_stream.write_all(&ABSENT_TAG)?;
        num_bytes += ABSENT_TAG.len();
        return Ok(num_bytes);
    }
    out_stream.write_all(&VARIABLE_TAG)?;
    num_bytes += VARIABLE_TAG.len();

    let bytes: [u8; 4] = (vars_layout_list.len() as i32).to_be_bytes();
    out_stream.write_all(&bytes)?;
    num_bytes += bytes.len();

    for (var, var_layout) in vars_layout_list.iter() {
        num_bytes += write_var(out_stream, var, var_layout)?;
    }
    Ok(num_bytes)
}

/// Allows to write NetCDF-3 files (the *classic* and the *64-bit offset* versions).
///
/// The writer emits strictly sequentially into any [`std::io::Write`] byte sink : the
/// layout planner resolves the header size and every variable `begin` offset before
/// the first byte is written, so no seek is ever needed. The whole data set (header
/// and variable data) is written by one call to
/// [`write_data_set`](struct.FileWriter.html#method.write_data_set).
///
/// # Example
///
/// ```
/// use nc3::{DataSet, DataType, FileWriter, FileReader};
///
/// const LATITUDE_VAR_DATA: [f32; 3] = [0.0, 1.0, 2.0];
///
/// // Create the NetCDF-3 definition
/// // ------------------------------
/// let mut data_set = DataSet::new();
/// let latitude = data_set.add_dim("latitude", 3, 1).unwrap();
/// data_set.add_var("latitude", DataType::Float).unwrap();
/// data_set.redim_var("latitude", &[latitude]).unwrap();
/// data_set.set_var_data_float("latitude", LATITUDE_VAR_DATA.to_vec()).unwrap();
///
/// // Write the data set into an in-memory sink
/// // -----------------------------------------
/// let mut writer: FileWriter<Vec<u8>> = FileWriter::new(Vec::new());
/// writer.write_data_set(&data_set, 0).unwrap();
/// let bytes: Vec<u8> = writer.into_inner();
///
/// // Re-read and compare
/// // -------------------
/// let reader = FileReader::open_seek_read("in_memory.nc", Box::new(std::io::Cursor::new(bytes))).unwrap();
/// let read_data_set: DataSet = reader.read_data_set().unwrap();
/// assert_eq!(data_set, read_data_set);
/// ```
#[derive(Debug)]
pub struct FileWriter<W: Write> {
    sink: W,
}

impl FileWriter<std::fs::File> {
    /// Opens and overwrites an existing NetCDF-3 file or creates one.
    pub fn open<P: std::convert::AsRef<Path>>(output_file_path: P) -> Result<FileWriter<std::fs::File>, WriteError> {
        let output_file: std::fs::File = std::fs::OpenOptions::new()
            .read(false)
            .write(true)
            .create(true)
            .create_new(false)
            .truncate(true)
            .append(false)
            .open(output_file_path)?;
        Ok(FileWriter::new(output_file))
    }

    /// Creates a new NetCDF-3 file.
    ///
    /// # Error
    ///
    /// An error occurs if the NetCDF-3 file already exists.
    pub fn create_new<P: std::convert::AsRef<Path>>(output_file_path: P) -> Result<FileWriter<std::fs::File>, WriteError> {
        let output_file: std::fs::File = std::fs::OpenOptions::new()
            .read(false)
            .write(true)
            .create_new(true)
            .open(output_file_path)?;
        Ok(FileWriter::new(output_file))
    }
}

impl<W: Write> FileWriter<W> {
    /// Creates a writer emitting into the byte sink.
    pub fn new(sink: W) -> FileWriter<W> {
        FileWriter { sink }
    }

    /// Releases the byte sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Serializes the whole data set (header then variable data) and returns the
    /// number of written bytes.
    ///
    /// # Arguments
    ///
    /// - `data_set`: the NetCDF-3 definition and data (also see [`DataSet`](struct.DataSet.html)).
    /// - `header_min_size`: the minimum number of bytes reserved for the header of the
    ///   NetCDF-3 file ; the remainder is zero padding.
    ///
    /// The *fixed-size* variables are emitted first (declaration order), then the
    /// record section record by record. A variable whose data has not been supplied is
    /// filled with the default fill value of its type. Data padding bytes are zeros.
    pub fn write_data_set(&mut self, data_set: &DataSet, header_min_size: usize) -> Result<usize, WriteError> {
        FileWriter::<W>::check_data_set(data_set)?;
        let layout: DataSetLayout = DataSetLayout::plan(data_set, header_min_size)?;
        debug!(
            "layout planned: header_size={} record_stride={} num_vars={}",
            layout.header_size,
            layout.record_stride,
            layout.vars.len()
        );

        let mut num_bytes: usize = self.write_header(data_set, &layout)?;
        num_bytes += self.write_data(data_set, &layout)?;
        self.sink.flush()?;
        debug!("data set written: {} bytes", num_bytes);
        Ok(num_bytes)
    }

    /// Checks that each supplied value vector agrees with its variable definition.
    fn check_data_set(data_set: &DataSet) -> Result<(), WriteError> {
        for var in data_set.vars.iter() {
            let values: &DataValues = match var.data() {
                None => continue, // filled with the default fill value
                Some(values) => values,
            };
            if values.data_type() != var.data_type() {
                return Err(WriteError::VariableMismatchDataType {
                    var_name: var.name().to_string(),
                    req: var.data_type(),
                    get: values.data_type(),
                });
            }
            let num_chunks: usize = if var.is_record_var() { data_set.num_records } else { 1 };
            let req_len: usize = num_chunks * var.chunk_len();
            if values.len() != req_len {
                return Err(WriteError::VariableMismatchDataLength {
                    var_name: var.name().to_string(),
                    req: req_len,
                    get: values.len(),
                });
            }
        }
        Ok(())
    }

    fn write_header(&mut self, data_set: &DataSet, layout: &DataSetLayout) -> Result<usize, WriteError> {
        let out_stream = &mut self.sink;
        let mut num_bytes: usize = 0;

        // The magic word
        out_stream.write_all(b"CDF")?;
        num_bytes += 3;
        // The version number
        out_stream.write_all(&[data_set.version.clone() as u8])?;
        num_bytes += 1;
        // The number of records, indeterminate when it does not fit the 32-bit field
        let num_records: u32 = if data_set.num_records <= (std::i32::MAX as usize) {
            data_set.num_records as u32
        } else {
            std::u32::MAX
        };
        out_stream.write_all(&num_records.to_be_bytes())?;
        num_bytes += 4;
        // The list of the dimensions
        num_bytes += write_dims_list(out_stream, data_set)?;
        // The list of the global attributes
        num_bytes += write_attrs_list(out_stream, &data_set.attrs)?;
        // The list of the variables, fixed-size variables first
        num_bytes += write_vars_list(out_stream, &layout.vars)?;
        // The reserved header bytes
        for _ in 0..layout.header_zero_padding_size {
            out_stream.write_all(&[0_u8])?;
        }
        num_bytes += layout.header_zero_padding_size;

        Ok(num_bytes)
    }

    fn write_data(&mut self, data_set: &DataSet, layout: &DataSetLayout) -> Result<usize, WriteError> {
        let out_stream = &mut self.sink;
        let mut num_bytes: usize = 0;

        // First the fixed-size variables, one contiguous block each
        for (var, _var_layout) in layout.vars.iter().filter(|(var, _)| !var.is_record_var()) {
            num_bytes += write_chunk(out_stream, var, 0)?;
        }
        // Then the record section, the record variables interleaved record by record
        let record_vars: Vec<&Variable> = layout
            .vars
            .iter()
            .filter(|(var, _)| var.is_record_var())
            .map(|(var, _)| *var)
            .collect();
        for record_index in 0..data_set.num_records {
            for var in record_vars.iter() {
                num_bytes += write_chunk(out_stream, var, record_index)?;
            }
        }
        Ok(num_bytes)
    }
}
