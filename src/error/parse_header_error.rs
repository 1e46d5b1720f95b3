// aliases
pub(crate) type NomErrorKind = nom::error::ErrorKind;
pub(crate) type NomError<'a> = nom::Err<(&'a [u8], NomErrorKind)>;

/// Error raised while the file header is parsed
///
/// Carries the section of the header that failed (`kind`) and either the offending
/// bytes or an incomplete-input marker when the buffered header bytes ran out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeaderError {
    pub kind: ParseHeaderErrorKind,
    pub invalid_bytes: InvalidBytes,
}

impl ParseHeaderError {
    pub(crate) fn new<'a>(err: NomError<'a>, kind: ParseHeaderErrorKind) -> Self {
        Self {
            kind,
            invalid_bytes: InvalidBytes::from(err),
        }
    }

    /// Returns `true` when more header bytes are required to settle the parsing.
    pub fn header_is_incomplete(&self) -> bool {
        matches!(self.invalid_bytes, InvalidBytes::Incomplete(_))
    }
}

impl std::fmt::Display for ParseHeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ParseHeaderError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidBytes {
    Incomplete(nom::Needed),
    Bytes(Vec<u8>),
}

impl<'a> std::convert::From<NomError<'a>> for InvalidBytes {
    fn from(err: NomError<'a>) -> Self {
        match err {
            NomError::Incomplete(needed) => InvalidBytes::Incomplete(needed),
            NomError::Error((err_bytes, _err_kind)) => InvalidBytes::Bytes(err_bytes.to_owned()),
            NomError::Failure((err_bytes, _err_kind)) => InvalidBytes::Bytes(err_bytes.to_owned()),
        }
    }
}

/// Section of the header where the parsing failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseHeaderErrorKind {
    /// The first 3 bytes are not `b"CDF"`.
    MagicWord,
    /// The version byte is neither 1 (classic) nor 2 (64-bit offset).
    VersionNumber,
    /// A count or size word is negative.
    NonNegativeI32,
    /// Padding bytes are not zero.
    ZeroPadding,
    DimTag,
    AttrTag,
    VarTag,
    /// A type tag is not one of the documented value types.
    DataType,
    DataElements,
    Utf8,
    Offset,
}
