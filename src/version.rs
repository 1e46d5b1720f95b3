#[repr(u8)]
#[derive(Debug, Clone, PartialEq, Eq)]
/// NetCDF-3 file versions (classic or 64-bit offset)
pub enum Version {
    /// Classic format (`i32` begin offsets)
    Classic = 1,
    /// 64-bit offset format (`i64` begin offsets)
    Offset64Bit = 2,
}

impl std::convert::TryFrom<u8> for Version {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1_u8 => Ok(Version::Classic),
            2_u8 => Ok(Version::Offset64Bit),
            _ => Err("Invalid value for a NetCDF-3 version."),
        }
    }
}

impl Version {
    /// Returns the width (number of bytes) of the variable `begin` offsets under this version.
    pub(crate) fn offset_size(&self) -> usize {
        match self {
            Version::Classic => std::mem::size_of::<i32>(),
            Version::Offset64Bit => std::mem::size_of::<i64>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Version;
    use std::convert::TryFrom;

    #[test]
    fn test_version_try_from_u8() {
        assert_eq!(
            Err("Invalid value for a NetCDF-3 version."),
            Version::try_from(0_u8)
        );
        assert_eq!(Ok(Version::Classic), Version::try_from(1_u8));
        assert_eq!(Ok(Version::Offset64Bit), Version::try_from(2_u8));
        assert_eq!(
            Err("Invalid value for a NetCDF-3 version."),
            Version::try_from(3_u8)
        );
    }

    #[test]
    fn test_version_offset_size() {
        assert_eq!(4, Version::Classic.offset_size());
        assert_eq!(8, Version::Offset64Bit.offset_size());
    }
}
