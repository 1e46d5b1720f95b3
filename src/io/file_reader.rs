mod tests_file_reader;

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt::Debug;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use byteorder::{BigEndian, ReadBytesExt};
use log::debug;

use nom::Parser;
use nom::{
    branch::alt,
    bytes::streaming::{tag, take},
    combinator::{map_res, verify},
    multi::many_m_n,
    number::streaming::{be_f32, be_f64, be_i16, be_i32, be_i64, be_u32, be_u8},
};

use crate::{
    error::parse_header_error::{NomError, ParseHeaderError, ParseHeaderErrorKind},
    error::ReadError,
    io::{compute_padding_size, Offset, ABSENT_TAG, ATTRIBUTE_TAG, DIMENSION_TAG, VARIABLE_TAG},
    size, DataSet, DataType, DataValues, Dimension, InvalidDataSet, Variable, Version,
};

/// A readable byte source with a seek-to-absolute-offset capability.
pub trait SeekRead: Seek + Read {}
impl<T: Seek + Read> SeekRead for T {}

impl Debug for dyn SeekRead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:p}", self)
    }
}

/// Allows to read NetCDF-3 files (the *classic* and the *64-bit offset* versions).
///
/// The header is parsed when the reader is opened ; the variable data is read on
/// demand, either one variable at a time ([`read_var`](struct.FileReader.html#method.read_var),
/// [`read_record`](struct.FileReader.html#method.read_record) and the typed variants),
/// wholesale into a map ([`read_all_vars`](struct.FileReader.html#method.read_all_vars)),
/// or loaded into the returned data set
/// ([`read_data_set`](struct.FileReader.html#method.read_data_set)).
///
/// # Example
///
/// ```
/// use nc3::{DataSet, DataType, FileReader, FileWriter, Version};
///
/// // Write a small file into an in-memory sink
/// // -----------------------------------------
/// let bytes: Vec<u8> = {
///     let mut data_set = DataSet::new();
///     let x = data_set.add_dim("x", 3, 1).unwrap();
///     data_set.add_var("temperature", DataType::Double).unwrap();
///     data_set.redim_var("temperature", &[x]).unwrap();
///     data_set.set_var_data_double("temperature", vec![1.0, 2.0, 3.0]).unwrap();
///
///     let mut writer = FileWriter::new(Vec::new());
///     writer.write_data_set(&data_set, 0).unwrap();
///     writer.into_inner()
/// };
///
/// // Read it back
/// // ------------
/// let mut reader = FileReader::open_seek_read("in_memory.nc", Box::new(std::io::Cursor::new(bytes))).unwrap();
///
/// assert_eq!(Version::Classic,                reader.version());
/// assert_eq!(1,                               reader.data_set().num_dims());
/// assert_eq!(true,                            reader.data_set().has_var("temperature"));
///
/// let temperatures: Vec<f64> = reader.read_var_double("temperature").unwrap();
/// assert_eq!(vec![1.0, 2.0, 3.0],             temperatures);
/// ```
#[derive(Debug)]
pub struct FileReader {
    data_set: DataSet,
    input_file_path: PathBuf,
    input_file: Box<dyn SeekRead>,
    vars_info: Vec<VariableParsedMetadata>,
}

macro_rules! impl_read_typed_var {
    ($func_name:ident, $prim_type:ty, $data_type:path, $data_values:path) => {
        /// Reads the typed variable and returns its values into a typed `Vec`.
        pub fn $func_name(&mut self, var_name: &str) -> Result<Vec<$prim_type>, ReadError> {
            let (_var_index, var): (usize, &Variable) = self
                .data_set
                .find_var_from_name(var_name)
                .map_err(|_err| ReadError::VariableNotDefined(String::from(var_name)))?;
            if var.data_type() != $data_type {
                return Err(ReadError::VariableMismatchDataType {
                    var_name: String::from(var_name),
                    req: var.data_type(),
                    get: $data_type,
                });
            }
            let values: DataValues = self.read_var(var_name)?;
            match values {
                $data_values(data) => Ok(data),
                _ => Err(ReadError::Unexpected), // previously checked
            }
        }
    };
}

macro_rules! impl_read_typed_record {
    ($func_name:ident, $prim_type:ty, $data_type:path, $data_values:path) => {
        /// Reads one record of the typed variable and returns its values into a typed `Vec`.
        pub fn $func_name(&mut self, var_name: &str, record_index: usize) -> Result<Vec<$prim_type>, ReadError> {
            let (_var_index, var): (usize, &Variable) = self
                .data_set
                .find_var_from_name(var_name)
                .map_err(|_err| ReadError::VariableNotDefined(String::from(var_name)))?;
            if var.data_type() != $data_type {
                return Err(ReadError::VariableMismatchDataType {
                    var_name: String::from(var_name),
                    req: var.data_type(),
                    get: $data_type,
                });
            }
            let values: DataValues = self.read_record(var_name, record_index)?;
            match values {
                $data_values(data) => Ok(data),
                _ => Err(ReadError::Unexpected), // previously checked
            }
        }
    };
}

impl FileReader {
    /// Returns the data set managed by the reader.
    pub fn data_set(&self) -> &DataSet {
        &self.data_set
    }

    /// Returns the version of the read file.
    pub fn version(&self) -> Version {
        self.data_set.version()
    }

    /// Returns the path of the read file, or the name given to
    /// [`open_seek_read`](struct.FileReader.html#method.open_seek_read).
    pub fn file_path(&self) -> &std::path::Path {
        &self.input_file_path
    }

    /// Parses the header of a NetCDF-3 byte source (any `Read + Seek` implementation).
    pub fn open_seek_read(
        input_file_name: &str,
        mut input_file: Box<dyn SeekRead>,
    ) -> Result<Self, ReadError> {
        let input_file_path: PathBuf = PathBuf::from(input_file_name);

        // determine the length, see https://doc.rust-lang.org/stable/src/std/io/mod.rs.html#1871-1882
        let pos: u64 = input_file.stream_position()?;
        let len: u64 = input_file.seek(SeekFrom::End(0))?;
        if pos != len {
            input_file.seek(SeekFrom::Start(pos))?;
        }

        Self::read_header(input_file_path, input_file, len)
    }

    /// Opens the file and parses the header of the NetCDF-3.
    pub fn open<P: AsRef<Path>>(input_file_path: P) -> Result<Self, ReadError> {
        let input_file_path: PathBuf = {
            let mut path = PathBuf::new();
            path.push(input_file_path);
            path
        };
        let input_file: Box<dyn SeekRead> = Box::new(std::fs::File::open(input_file_path.clone())?);
        let file_size: u64 = std::fs::metadata(&input_file_path)?.len();

        Self::read_header(input_file_path, input_file, file_size)
    }

    /// Parses the header of the NetCDF-3, refilling the buffer while the parsing
    /// reports an incomplete input.
    fn read_header(
        input_file_path: PathBuf,
        mut input_file: Box<dyn SeekRead>,
        file_size: u64,
    ) -> Result<Self, ReadError> {
        const BUFFER_SIZE: usize = 1024;

        let (data_set, vars_info): (DataSet, Vec<VariableParsedMetadata>) = {
            let mut buffer: Vec<u8> = vec![];
            loop {
                // Load more bytes
                let old_buf_size: usize = buffer.len();
                let new_buf_size: usize = std::cmp::min((old_buf_size + BUFFER_SIZE) as u64, file_size) as usize;
                buffer.resize(new_buf_size, 0_u8);
                input_file.read_exact(&mut buffer[old_buf_size..new_buf_size])?;

                match FileReader::parse_header(&buffer, file_size as usize) {
                    Ok(parsed) => break parsed,
                    Err(read_err) => {
                        let whole_file_is_buffered: bool = buffer.len() as u64 >= file_size;
                        if !read_err.header_is_incomplete() || whole_file_is_buffered {
                            return Err(read_err);
                        }
                        // otherwise loop and load more bytes
                    }
                }
            }
        };
        debug!(
            "header parsed: version={:?} num_dims={} num_vars={}",
            data_set.version(),
            data_set.num_dims(),
            data_set.num_vars()
        );

        Ok(FileReader {
            data_set,
            input_file_path,
            input_file,
            vars_info,
        })
    }

    /// Releases the byte source and returns the data set.
    pub fn close(self) -> DataSet {
        self.data_set
    }

    /// Reads the data of every variable, loads it into the data set and returns the
    /// data set.
    pub fn read_data_set(mut self) -> Result<DataSet, ReadError> {
        let var_names: Vec<String> = self.data_set.get_var_names();
        for var_name in var_names.into_iter() {
            let values: DataValues = self.read_var(&var_name)?;
            self.data_set.set_var_data(&var_name, values)?;
        }
        Ok(self.data_set)
    }

    /// Allows to read all the variable data easily.
    pub fn read_all_vars(&mut self) -> Result<HashMap<String, DataValues>, ReadError> {
        let var_names: Vec<String> = self.data_set.get_var_names();
        var_names
            .into_iter()
            .map(|var_name: String| {
                let var_data: DataValues = self.read_var(&var_name)?;
                Ok((var_name, var_data))
            })
            .collect()
    }

    /// Reads the variable and returns its values into a typed vector.
    ///
    /// A record variable is read record by record : `num_records` chunks spaced by the
    /// per-record stride.
    pub fn read_var(&mut self, var_name: &str) -> Result<DataValues, ReadError> {
        let (_var_index, var): (usize, &Variable) = self
            .data_set
            .find_var_from_name(var_name)
            .map_err(|_err| ReadError::VariableNotDefined(String::from(var_name)))?;
        let record_size: usize = self.data_set.record_size().unwrap_or(0);
        let num_records: usize = self.data_set.num_records();
        let begin_offset: u64 = {
            let var_info: &VariableParsedMetadata =
                self.find_var_info(var_name).ok_or(ReadError::Unexpected)?;
            i64::from(var_info.begin_offset.clone()) as u64
        };
        let data_type: DataType = var.data_type();
        let chunk_len: usize = var.chunk_len();
        let padding_size: usize = compute_padding_size(chunk_len * data_type.size_of());
        let num_chunks: usize = if var.is_record_var() { num_records } else { 1 };

        let input = &mut self.input_file;
        input.seek(SeekFrom::Start(begin_offset))?;
        // memory allocation
        let mut values = DataValues::new(data_type, num_chunks * chunk_len);
        if !var.is_record_var() {
            match values {
                DataValues::Byte(ref mut data) => input.read_exact(&mut data[..]),
                DataValues::Char(ref mut data) => input.read_exact(&mut data[..]),
                DataValues::Short(ref mut data) => input.read_i16_into::<BigEndian>(&mut data[..]),
                DataValues::Int(ref mut data) => input.read_i32_into::<BigEndian>(&mut data[..]),
                DataValues::Float(ref mut data) => input.read_f32_into::<BigEndian>(&mut data[..]),
                DataValues::Double(ref mut data) => input.read_f64_into::<BigEndian>(&mut data[..]),
            }?;
        } else {
            let chunk_size: usize = var.chunk_size();
            // distance from the end of one useful chunk to the start of the next one
            let inter_chunk_gap: i64 = (record_size + padding_size - chunk_size) as i64;
            for i in 0_usize..num_chunks {
                let start: usize = i * chunk_len;
                let end: usize = (i + 1) * chunk_len;
                match values {
                    DataValues::Byte(ref mut data) => input.read_exact(&mut data[start..end]),
                    DataValues::Char(ref mut data) => input.read_exact(&mut data[start..end]),
                    DataValues::Short(ref mut data) => input.read_i16_into::<BigEndian>(&mut data[start..end]),
                    DataValues::Int(ref mut data) => input.read_i32_into::<BigEndian>(&mut data[start..end]),
                    DataValues::Float(ref mut data) => input.read_f32_into::<BigEndian>(&mut data[start..end]),
                    DataValues::Double(ref mut data) => input.read_f64_into::<BigEndian>(&mut data[start..end]),
                }?;
                if i + 1 < num_chunks {
                    input.seek(SeekFrom::Current(inter_chunk_gap))?;
                }
            }
        }
        Ok(values)
    }

    impl_read_typed_var!(read_var_byte, u8, DataType::Byte, DataValues::Byte);
    impl_read_typed_var!(read_var_char, u8, DataType::Char, DataValues::Char);
    impl_read_typed_var!(read_var_short, i16, DataType::Short, DataValues::Short);
    impl_read_typed_var!(read_var_int, i32, DataType::Int, DataValues::Int);
    impl_read_typed_var!(read_var_float, f32, DataType::Float, DataValues::Float);
    impl_read_typed_var!(read_var_double, f64, DataType::Double, DataValues::Double);

    /// Reads one record of the variable and returns its values into a typed vector.
    pub fn read_record(&mut self, var_name: &str, record_index: usize) -> Result<DataValues, ReadError> {
        let (_var_index, var): (usize, &Variable) = self
            .data_set
            .find_var_from_name(var_name)
            .map_err(|_err| ReadError::VariableNotDefined(String::from(var_name)))?;
        // a fixed-size variable has exactly one record
        let num_records: usize = if var.is_record_var() { self.data_set.num_records() } else { 1 };
        if record_index >= num_records {
            return Err(ReadError::RecordIndexExceeded {
                index: record_index,
                num_records,
            });
        }

        // Compute the record offset from the start of the byte source
        let var_info: &VariableParsedMetadata =
            self.find_var_info(var_name).ok_or(ReadError::Unexpected)?;
        let record_size: usize = self.data_set.record_size().unwrap_or(0);
        let record_offset: u64 =
            (i64::from(var_info.begin_offset.clone()) as u64) + ((record_index * record_size) as u64);
        self.input_file.seek(SeekFrom::Start(record_offset))?;

        // Read the chunk
        let data_type: DataType = var.data_type();
        let mut values: DataValues = DataValues::new(data_type, var.chunk_len());
        match values {
            DataValues::Byte(ref mut data) => self.input_file.read_exact(&mut data[..]),
            DataValues::Char(ref mut data) => self.input_file.read_exact(&mut data[..]),
            DataValues::Short(ref mut data) => self.input_file.read_i16_into::<BigEndian>(&mut data[..]),
            DataValues::Int(ref mut data) => self.input_file.read_i32_into::<BigEndian>(&mut data[..]),
            DataValues::Float(ref mut data) => self.input_file.read_f32_into::<BigEndian>(&mut data[..]),
            DataValues::Double(ref mut data) => self.input_file.read_f64_into::<BigEndian>(&mut data[..]),
        }?;
        Ok(values)
    }

    impl_read_typed_record!(read_record_byte, u8, DataType::Byte, DataValues::Byte);
    impl_read_typed_record!(read_record_char, u8, DataType::Char, DataValues::Char);
    impl_read_typed_record!(read_record_short, i16, DataType::Short, DataValues::Short);
    impl_read_typed_record!(read_record_int, i32, DataType::Int, DataValues::Int);
    impl_read_typed_record!(read_record_float, f32, DataType::Float, DataValues::Float);
    impl_read_typed_record!(read_record_double, f64, DataType::Double, DataValues::Double);

    /// Parses the NetCDF-3 header.
    fn parse_header(
        input: &[u8],
        total_file_size: usize,
    ) -> Result<(DataSet, Vec<VariableParsedMetadata>), ReadError> {
        // the magic word
        let (input, _): (&[u8], &[u8]) = FileReader::parse_magic_word(input)?;
        // the version number
        let (input, version): (&[u8], Version) = FileReader::parse_version(input)?;
        // the number of records, `None` when indeterminate
        let (input, num_records): (&[u8], Option<usize>) = FileReader::parse_as_usize_optional(input)?;
        // the lists of the header
        let (input, dims_list): (&[u8], Vec<(String, usize)>) = FileReader::parse_dims_list(input)?;
        let (input, global_attrs_list): (&[u8], Vec<(String, DataValues)>) = FileReader::parse_attrs_list(input)?;
        let (_input, var_info_list): (&[u8], Vec<VariableParsedMetadata>) =
            FileReader::parse_vars_list(input, version.clone())?;

        // Create a new data set
        let mut data_set = DataSet::new();
        data_set.set_version(version);
        let (num_records, num_records_is_determinate): (usize, bool) = match num_records {
            Some(num_records) => (num_records, true),
            None => (0, false),
        };
        data_set.set_num_records(num_records);

        // Append the dimensions
        for (dim_name, dim_size) in dims_list.into_iter() {
            if dim_size == 0 {
                // a second record dimension violates the model
                if let Some(unlim_dim) = data_set.get_unlimited_dim() {
                    return Err(ReadError::DataSet(InvalidDataSet::UnlimitedDimensionAlreadyExists(
                        unlim_dim.name(),
                    )));
                }
                data_set.add_dim(dim_name, 0, 1)?;
            } else {
                data_set.add_fixed_dim(dim_name, dim_size)?;
            }
        }

        // Append the global attributes
        for (attr_name, attr_values) in global_attrs_list.into_iter() {
            use DataValues::*;
            match attr_values {
                Byte(data) => {
                    data_set.add_global_attr_byte(&attr_name, data)?;
                }
                Char(data) => {
                    data_set.add_global_attr_char(&attr_name, data)?;
                }
                Short(data) => {
                    data_set.add_global_attr_short(&attr_name, data)?;
                }
                Int(data) => {
                    data_set.add_global_attr_int(&attr_name, data)?;
                }
                Float(data) => {
                    data_set.add_global_attr_float(&attr_name, data)?;
                }
                Double(data) => {
                    data_set.add_global_attr_double(&attr_name, data)?;
                }
            }
        }

        // Append the variables
        for var_info in var_info_list.iter() {
            let dim_refs: Vec<Rc<Dimension>> = data_set.get_dims_from_dim_ids(&var_info.dim_ids)?;
            data_set.add_var_using_dim_refs(&var_info.name, dim_refs, var_info.data_type.clone())?;
            // Append the variable attributes
            let var_name: String = var_info.name.clone();
            for (attr_name, attr_values) in var_info.attrs_list.iter() {
                use DataValues::*;
                match attr_values {
                    Byte(data) => {
                        data_set.add_var_attr_byte(&var_name, attr_name, data.clone())?;
                    }
                    Char(data) => {
                        data_set.add_var_attr_char(&var_name, attr_name, data.clone())?;
                    }
                    Short(data) => {
                        data_set.add_var_attr_short(&var_name, attr_name, data.clone())?;
                    }
                    Int(data) => {
                        data_set.add_var_attr_int(&var_name, attr_name, data.clone())?;
                    }
                    Float(data) => {
                        data_set.add_var_attr_float(&var_name, attr_name, data.clone())?;
                    }
                    Double(data) => {
                        data_set.add_var_attr_double(&var_name, attr_name, data.clone())?;
                    }
                }
            }
        }

        FileReader::check_var_offsets(&data_set, &var_info_list)?;

        if !num_records_is_determinate {
            // the streaming sentinel: resolve the record count from the trailing bytes
            let num_records: usize = match data_set.record_size() {
                None => 0, // no record dimension, nothing past the fixed regions
                Some(record_size) => {
                    let record_var_begin_offsets: Vec<usize> = var_info_list
                        .iter()
                        .filter(|var_info: &&VariableParsedMetadata| {
                            data_set
                                .is_record_var(&var_info.name)
                                .unwrap_or(false)
                        })
                        .map(|var_info: &VariableParsedMetadata| {
                            i64::from(var_info.begin_offset.clone()) as usize
                        })
                        .collect();
                    match record_var_begin_offsets.into_iter().min() {
                        None => 0, // the record dimension is defined but no variable uses it
                        Some(first_begin_offset) => {
                            if record_size == 0 {
                                // cannot be zero while a record variable exists
                                return Err(ReadError::Unexpected);
                            }
                            let all_records_size: usize = total_file_size
                                .checked_sub(first_begin_offset)
                                .ok_or(ReadError::ComputationNumberOfRecords)?;
                            if all_records_size % record_size != 0 {
                                return Err(ReadError::ComputationNumberOfRecords);
                            }
                            all_records_size / record_size
                        }
                    }
                }
            };
            data_set.set_num_records(num_records);
        }

        Ok((data_set, var_info_list))
    }

    /// Checks the declared `begin` offsets : every data region starts at or after the
    /// end of the header, the fixed-variable offsets are strictly increasing in header
    /// order, and every record-variable region lies after the fixed-variable regions.
    fn check_var_offsets(
        data_set: &DataSet,
        var_info_list: &[VariableParsedMetadata],
    ) -> Result<(), ReadError> {
        let header_size: usize = size::header_size(data_set);

        let mut prev_fixed_begin: Option<i64> = None;
        let mut fixed_region_end: i64 = header_size as i64;
        for var_info in var_info_list.iter() {
            let var: &Variable = data_set
                .get_var(&var_info.name)
                .ok_or(ReadError::Unexpected)?;
            let begin_offset: i64 = i64::from(var_info.begin_offset.clone());
            if begin_offset < header_size as i64 {
                return Err(ReadError::VariableOffsetBeforeHeaderEnd {
                    var_name: var_info.name.clone(),
                    begin_offset,
                    header_size,
                });
            }
            if !var.is_record_var() {
                if let Some(prev_begin) = prev_fixed_begin {
                    if begin_offset <= prev_begin {
                        return Err(ReadError::UnorderedVariableOffsets {
                            var_name: var_info.name.clone(),
                        });
                    }
                }
                prev_fixed_begin = Some(begin_offset);
                fixed_region_end = begin_offset + var.chunk_size() as i64;
            }
        }

        let mut prev_record_begin: Option<i64> = None;
        for var_info in var_info_list.iter() {
            let var: &Variable = data_set
                .get_var(&var_info.name)
                .ok_or(ReadError::Unexpected)?;
            if !var.is_record_var() {
                continue;
            }
            let begin_offset: i64 = i64::from(var_info.begin_offset.clone());
            if begin_offset < fixed_region_end {
                return Err(ReadError::UnorderedVariableOffsets {
                    var_name: var_info.name.clone(),
                });
            }
            if let Some(prev_begin) = prev_record_begin {
                if begin_offset <= prev_begin {
                    return Err(ReadError::UnorderedVariableOffsets {
                        var_name: var_info.name.clone(),
                    });
                }
            }
            prev_record_begin = Some(begin_offset);
        }
        Ok(())
    }

    fn parse_magic_word(input: &[u8]) -> Result<(&[u8], &[u8]), ParseHeaderError> {
        let (input, tag_value): (&[u8], &[u8]) = tag(&b"CDF"[..])(input)
            .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::MagicWord))?;
        Ok((input, tag_value))
    }

    fn parse_version(input: &[u8]) -> Result<(&[u8], Version), ParseHeaderError> {
        let (input, version_number): (&[u8], u8) = verify(be_u8, |ver_num: &u8| {
            ver_num == &(Version::Classic as u8) || ver_num == &(Version::Offset64Bit as u8)
        })
        .parse(input)
        .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::VersionNumber))?;
        let version = Version::try_from(version_number).unwrap(); // previously checked
        Ok((input, version))
    }

    /// Parses a `i32` word and checks that it is non-negative.
    fn parse_non_neg_i32(input: &[u8]) -> Result<(&[u8], i32), ParseHeaderError> {
        verify(be_i32, |number: &i32| *number >= 0_i32)
            .parse(input)
            .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::NonNegativeI32))
    }

    /// Parses a non-negative `i32` word and converts it to a `usize`.
    fn parse_as_usize(input: &[u8]) -> Result<(&[u8], usize), ParseHeaderError> {
        let (input, number): (&[u8], i32) = FileReader::parse_non_neg_i32(input)?;
        Ok((input, number as usize))
    }

    /// Parses the number of records.
    ///
    /// Returns :
    /// - the number of records if it is a valid integer
    /// - `None` if the number of records is indeterminate (`2^32 - 1`)
    fn parse_as_usize_optional(input: &[u8]) -> Result<(&[u8], Option<usize>), ParseHeaderError> {
        const INDETERMINATE_VALUE: u32 = u32::MAX;
        let (input, value): (&[u8], u32) = verify(be_u32, |number: &u32| {
            *number <= (i32::MAX as u32) || *number == INDETERMINATE_VALUE
        })
        .parse(input)
        .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::NonNegativeI32))?;
        let value: Option<usize> = match value {
            INDETERMINATE_VALUE => None,
            _ => Some(value as usize),
        };
        Ok((input, value))
    }

    /// Parses a non-negative `i32` word and converts it to a `u32`.
    fn parse_as_u32(input: &[u8]) -> Result<(&[u8], u32), ParseHeaderError> {
        let (input, number): (&[u8], i32) = FileReader::parse_non_neg_i32(input)?;
        Ok((input, number as u32))
    }

    /// Parses a length-prefixed padded name.
    fn parse_name_string(input: &[u8]) -> Result<(&[u8], String), ParseHeaderError> {
        let (input, num_of_bytes): (&[u8], usize) = FileReader::parse_as_usize(input)?;
        let (input, name): (&[u8], String) = map_res(take(num_of_bytes), |bytes: &[u8]| {
            String::from_utf8(bytes.to_vec())
        })
        .parse(input)
        .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::Utf8))?;
        // Take the zero padding bytes if necessary
        let (input, _zero_padding_bytes): (&[u8], &[u8]) =
            FileReader::parse_zero_padding(input, compute_padding_size(num_of_bytes))?;
        Ok((input, name))
    }

    /// Parses a NetCDF-3 data type tag.
    fn parse_data_type(input: &[u8]) -> Result<(&[u8], DataType), ParseHeaderError> {
        let start: &[u8] = input;
        let (input, data_type_number): (&[u8], u32) = FileReader::parse_as_u32(input)?;
        let data_type: DataType = DataType::try_from(data_type_number)
            .map_err(|_err| nom::Err::Error((&start[0..4], nom::error::ErrorKind::Verify)))
            .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::DataType))?;
        Ok((input, data_type))
    }

    /// Parses `num_of_elements` typed primitives, then the zero padding bytes of the
    /// value block.
    fn parse_typed_data_elements(
        input: &[u8],
        num_of_elements: usize,
        data_type: DataType,
    ) -> Result<(&[u8], DataValues), ParseHeaderError> {
        // Parse the useful data
        let (input, data_values): (&[u8], DataValues) = match data_type {
            DataType::Byte => many_m_n(num_of_elements, num_of_elements, be_u8)
                .parse(input)
                .map(|(input, data): (&[u8], Vec<u8>)| (input, DataValues::Byte(data))),
            DataType::Char => many_m_n(num_of_elements, num_of_elements, be_u8)
                .parse(input)
                .map(|(input, data): (&[u8], Vec<u8>)| (input, DataValues::Char(data))),
            DataType::Short => many_m_n(num_of_elements, num_of_elements, be_i16)
                .parse(input)
                .map(|(input, data): (&[u8], Vec<i16>)| (input, DataValues::Short(data))),
            DataType::Int => many_m_n(num_of_elements, num_of_elements, be_i32)
                .parse(input)
                .map(|(input, data): (&[u8], Vec<i32>)| (input, DataValues::Int(data))),
            DataType::Float => many_m_n(num_of_elements, num_of_elements, be_f32)
                .parse(input)
                .map(|(input, data): (&[u8], Vec<f32>)| (input, DataValues::Float(data))),
            DataType::Double => many_m_n(num_of_elements, num_of_elements, be_f64)
                .parse(input)
                .map(|(input, data): (&[u8], Vec<f64>)| (input, DataValues::Double(data))),
        }
        .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::DataElements))?;

        // Parse the zero padding bytes if necessary
        let num_of_bytes: usize = data_type.size_of() * num_of_elements;
        let (input, _zero_padding_bytes): (&[u8], &[u8]) =
            FileReader::parse_zero_padding(input, compute_padding_size(num_of_bytes))?;
        Ok((input, data_values))
    }

    fn parse_zero_padding(input: &[u8], num_bytes: usize) -> Result<(&[u8], &[u8]), ParseHeaderError> {
        verify(take(num_bytes), |padding_bytes: &[u8]| {
            padding_bytes.iter().all(|byte: &u8| *byte == 0_u8)
        })
        .parse(input)
        .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::ZeroPadding))
    }

    /// Parses the list of the dimensions from the header.
    #[allow(clippy::type_complexity)]
    fn parse_dims_list(input: &[u8]) -> Result<(&[u8], Vec<(String, usize)>), ParseHeaderError> {
        fn parse_dim(input: &[u8]) -> Result<(&[u8], (String, usize)), ParseHeaderError> {
            let (input, dim_name): (&[u8], String) = FileReader::parse_name_string(input)?;
            let (input, dim_size): (&[u8], usize) = FileReader::parse_as_usize(input)?;
            Ok((input, (dim_name, dim_size)))
        }
        let (input, dim_tag): (&[u8], &[u8]) = alt((tag(ABSENT_TAG), tag(DIMENSION_TAG)))
            .parse(input)
            .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::DimTag))?;
        if dim_tag == ABSENT_TAG {
            return Ok((input, vec![]));
        }
        let (mut input, num_of_dims): (&[u8], usize) = FileReader::parse_as_usize(input)?;
        let mut dims_list: Vec<(String, usize)> = Vec::with_capacity(num_of_dims);
        for _ in 0..num_of_dims {
            let (rem_input, dim): (&[u8], (String, usize)) = parse_dim(input)?;
            input = rem_input;
            dims_list.push(dim);
        }
        Ok((input, dims_list))
    }

    /// Parses a list of attributes (global or of one variable) from the header.
    #[allow(clippy::type_complexity)]
    fn parse_attrs_list(input: &[u8]) -> Result<(&[u8], Vec<(String, DataValues)>), ParseHeaderError> {
        fn parse_attr(input: &[u8]) -> Result<(&[u8], (String, DataValues)), ParseHeaderError> {
            let (input, attr_name): (&[u8], String) = FileReader::parse_name_string(input)?;
            let (input, attr_data_type): (&[u8], DataType) = FileReader::parse_data_type(input)?;
            let (input, num_of_elements): (&[u8], usize) = FileReader::parse_as_usize(input)?;
            let (input, attr_values): (&[u8], DataValues) =
                FileReader::parse_typed_data_elements(input, num_of_elements, attr_data_type)?;
            Ok((input, (attr_name, attr_values)))
        }
        let (input, attr_tag): (&[u8], &[u8]) = alt((tag(ABSENT_TAG), tag(ATTRIBUTE_TAG)))
            .parse(input)
            .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::AttrTag))?;
        if attr_tag == ABSENT_TAG {
            return Ok((input, vec![]));
        }
        let (mut input, num_of_attrs): (&[u8], usize) = FileReader::parse_as_usize(input)?;
        let mut attrs_list: Vec<(String, DataValues)> = Vec::with_capacity(num_of_attrs);
        for _ in 0..num_of_attrs {
            let (rem_input, attr): (&[u8], (String, DataValues)) = parse_attr(input)?;
            input = rem_input;
            attrs_list.push(attr);
        }
        Ok((input, attrs_list))
    }

    /// Parses the list of the variable headers.
    fn parse_vars_list(
        input: &[u8],
        version: Version,
    ) -> Result<(&[u8], Vec<VariableParsedMetadata>), ParseHeaderError> {
        fn parse_dim_ids_list(input: &[u8]) -> Result<(&[u8], Vec<usize>), ParseHeaderError> {
            // the number of dimensions
            let (mut input, num_of_dims): (&[u8], usize) = FileReader::parse_as_usize(input)?;
            // the list of the dimension ids
            let mut dim_ids_list: Vec<usize> = Vec::with_capacity(num_of_dims);
            for _ in 0..num_of_dims {
                let (rem_input, dim_id): (&[u8], usize) = FileReader::parse_as_usize(input)?;
                input = rem_input;
                dim_ids_list.push(dim_id);
            }
            Ok((input, dim_ids_list))
        }

        fn parse_offset(input: &[u8], version: Version) -> Result<(&[u8], Offset), ParseHeaderError> {
            match version {
                Version::Classic => {
                    be_i32(input).map(|(input, num_of_bytes): (&[u8], i32)| (input, Offset::I32(num_of_bytes)))
                }
                Version::Offset64Bit => {
                    be_i64(input).map(|(input, num_of_bytes): (&[u8], i64)| (input, Offset::I64(num_of_bytes)))
                }
            }
            .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::Offset))
        }

        fn parse_var(input: &[u8], version: Version) -> Result<(&[u8], VariableParsedMetadata), ParseHeaderError> {
            // the name of the variable
            let (input, var_name): (&[u8], String) = FileReader::parse_name_string(input)?;
            // the list of the dimension ids
            let (input, dim_ids): (&[u8], Vec<usize>) = parse_dim_ids_list(input)?;
            // the list of the variable attributes
            let (input, attrs_list): (&[u8], Vec<(String, DataValues)>) = FileReader::parse_attrs_list(input)?;
            // the data type of the variable
            let (input, data_type): (&[u8], DataType) = FileReader::parse_data_type(input)?;
            // the size occupied by each chunk of the variable (number of bytes)
            let (input, chunk_size): (&[u8], Option<usize>) = FileReader::parse_as_usize_optional(input)?;
            // the begin offset (number of bytes)
            let (input, begin_offset): (&[u8], Offset) = parse_offset(input, version)?;
            let var_info = VariableParsedMetadata {
                name: var_name,
                dim_ids,
                attrs_list,
                data_type,
                _chunk_size: chunk_size,
                begin_offset,
            };
            Ok((input, var_info))
        }

        let (input, var_tag): (&[u8], &[u8]) = alt((tag(ABSENT_TAG), tag(VARIABLE_TAG)))
            .parse(input)
            .map_err(|err: NomError| ParseHeaderError::new(err, ParseHeaderErrorKind::VarTag))?;
        if var_tag == ABSENT_TAG {
            return Ok((input, vec![]));
        }
        let (mut input, num_of_vars): (&[u8], usize) = FileReader::parse_as_usize(input)?;
        let mut vars_list: Vec<VariableParsedMetadata> = Vec::with_capacity(num_of_vars);
        for _ in 0..num_of_vars {
            let (rem_input, var_info) = parse_var(input, version.clone())?;
            input = rem_input;
            vars_list.push(var_info);
        }
        Ok((input, vars_list))
    }

    fn find_var_info(&self, var_name: &str) -> Option<&VariableParsedMetadata> {
        self.vars_info.iter().find(|var_info| var_info.name == var_name)
    }
}

/// Variable metadata parsed from one header entry : the declared begin offset is kept
/// here, the data model itself never stores offsets.
#[derive(Debug, Clone, PartialEq)]
struct VariableParsedMetadata {
    name: String,
    dim_ids: Vec<usize>,
    attrs_list: Vec<(String, DataValues)>,
    data_type: DataType,
    _chunk_size: Option<usize>,
    begin_offset: Offset,
}
