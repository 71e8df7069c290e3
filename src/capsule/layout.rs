use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

/// On-disk bytes of the GUID that anchors the flashback record
pub const MARKER: [u8; 16] = [
    0x19, 0x4F, 0xC1, 0x4C, 0x26, 0xC6, 0xB6, 0x4A, //
    0x9D, 0xEA, 0xCA, 0x6C, 0x01, 0xFD, 0x10, 0xCD,
];

/// ASCII tag searched for from the marker onwards
pub const TAG: &[u8] = b"$BOOTEFI$";

/// Distance from the start of the tag to the filename field
pub const NAME_OFFSET: usize = 0x91;

/// Filename field size, null-padded
pub const NAME_LEN: usize = 12;

/// EFI GUID in its mixed-endian on-disk layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EfiGuid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl EfiGuid {
    pub const SIZE: usize = 16;

    pub fn from_bytes(data: &[u8; 16]) -> Self {
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&data[8..]);

        Self {
            data1: LittleEndian::read_u32(&data[0..4]),
            data2: LittleEndian::read_u16(&data[4..6]),
            data3: LittleEndian::read_u16(&data[6..8]),
            data4,
        }
    }

    /// The GUID encoded by [`MARKER`]
    pub fn marker() -> Self {
        Self::from_bytes(&MARKER)
    }
}

impl fmt::Display for EfiGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:02X}{:02X}-",
            self.data1, self.data2, self.data3, self.data4[0], self.data4[1]
        )?;
        for b in &self.data4[2..] {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// Offsets computed while walking from the marker to the filename field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub marker_offset: usize,
    pub tag_offset: usize,
    pub name_offset: usize,
}

impl Location {
    /// Byte range of the filename field within the capsule
    pub fn name_range(&self) -> std::ops::Range<usize> {
        self.name_offset..self.name_offset + NAME_LEN
    }
}
