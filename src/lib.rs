//! # Description
//!
//! A pure Rust codec for the NetCDF *classic* and *64-bit offset* file formats
//! (also known as CDF-1 and CDF-2).
//!
//! - Define a NetCDF-3 data set in memory using the struct [`DataSet`](struct.DataSet.html) :
//!     - Define (create, get, rename and remove) dimensions, including the optional *unlimited* one;
//!     - Define (create, get, rename and remove) global and per-variable attributes;
//!     - Define (create, get, rename and remove) variables and set their data.
//! - Read NetCDF-3 files, or any seekable byte source, using the struct [`FileReader`](struct.FileReader.html).
//! - Write NetCDF-3 files, or any sequential byte sink, using the struct [`FileWriter`](struct.FileWriter.html).
//!   All variable offsets are planned before the first byte is emitted, so the writer never seeks.
//!
//! # Notes
//!
//! - If the number of records `numrecs` is greater than `std::i32::MAX` then this value is
//!   considered as indeterminate and the actually written value is `numrecs = 2^32 - 1`
//!   (see the [File Format Specifications][File_Format_Specs]).
//! - If the chunk size of a given variable `vsize` is greater than `std::i32::MAX` then its
//!   value is considered as indeterminate and the actually written value is `vsize = 2^32 - 1`.
//! - Chunk sizes are accumulated in 64 bits; overflow of the on-disk 32-bit field beyond
//!   `2^31 - 1` is tolerated but not validated (a limitation of the CDF-1/CDF-2 formats).
//!
//! ## Known limitations
//!
//! - Cannot read/write a subset of a variable data yet.
//! - Cannot rewrite a NetCDF-3 file in place.
//! - NetCDF-4/HDF5 files are not supported.
//!
//! [File_Format_Specs]: https://www.unidata.ucar.edu/software/netcdf/docs/file_format_specifications.html
pub mod error;
pub use error::{InvalidDataSet, ReadError, WriteError};

mod name_string;
pub use name_string::is_valid_name;
pub use name_string::NC_MAX_NAME_SIZE;

mod data_type;
pub use data_type::DataType;

mod data_values;
pub use data_values::DataValues;

mod data_set;
pub use data_set::{Attribute, DataSet, Dimension, DimensionType, Variable};
pub use data_set::NC_FILL_BYTE;
pub use data_set::NC_FILL_CHAR;
pub use data_set::NC_FILL_SHORT;
pub use data_set::NC_FILL_INT;
pub use data_set::NC_FILL_FLOAT;
pub use data_set::NC_FILL_DOUBLE;
pub use data_set::NC_MAX_DIM_SIZE;
pub use data_set::NC_MAX_VAR_DIMS;

mod size;
mod layout;

mod io;
pub use io::{FileReader, SeekRead};
pub use io::FileWriter;

mod version;
pub use version::Version;
