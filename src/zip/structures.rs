use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use crate::error::Result;

/// Version needed to extract / version made by.
///
/// 20 (= 2.0) is the baseline every reader accepts for store-method
/// entries; nothing in these archives needs a newer feature set.
pub const ZIP_VERSION: u16 = 20;

/// Compression method 0: store (verbatim, uncompressed).
pub const METHOD_STORE: u16 = 0;

/// Local File Header (LFH) - 30 bytes + file name, followed by the data
pub struct LocalFileHeader<'a> {
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub name: &'a [u8],
}

impl<'a> LocalFileHeader<'a> {
    pub const SIGNATURE: &'static [u8] = b"PK\x03\x04";
    pub const SIZE: usize = 30;

    /// Serialized header length, not counting the entry data that follows.
    pub fn len(&self) -> usize {
        Self::SIZE + self.name.len()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(Self::SIGNATURE)?;
        out.write_u16::<LittleEndian>(ZIP_VERSION)?; // version needed to extract
        out.write_u16::<LittleEndian>(0)?; // general purpose bit flag
        out.write_u16::<LittleEndian>(METHOD_STORE)?;
        out.write_u16::<LittleEndian>(0)?; // last mod time
        out.write_u16::<LittleEndian>(0)?; // last mod date
        out.write_u32::<LittleEndian>(self.crc32)?;
        out.write_u32::<LittleEndian>(self.compressed_size)?;
        out.write_u32::<LittleEndian>(self.uncompressed_size)?;
        out.write_u16::<LittleEndian>(self.name.len() as u16)?;
        out.write_u16::<LittleEndian>(0)?; // extra field length
        out.write_all(self.name)?;
        Ok(())
    }
}

/// Central Directory File Header (CDFH) - 46 bytes + file name
pub struct CentralDirectoryHeader<'a> {
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    /// Where this entry's local header was written, relative to the
    /// start of the archive.
    pub lfh_offset: u32,
    pub name: &'a [u8],
}

impl<'a> CentralDirectoryHeader<'a> {
    pub const SIGNATURE: &'static [u8] = b"PK\x01\x02";
    pub const SIZE: usize = 46;

    pub fn len(&self) -> usize {
        Self::SIZE + self.name.len()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(Self::SIGNATURE)?;
        out.write_u16::<LittleEndian>(ZIP_VERSION)?; // version made by
        out.write_u16::<LittleEndian>(ZIP_VERSION)?; // version needed to extract
        out.write_u16::<LittleEndian>(0)?; // general purpose bit flag
        out.write_u16::<LittleEndian>(METHOD_STORE)?;
        out.write_u16::<LittleEndian>(0)?; // last mod time
        out.write_u16::<LittleEndian>(0)?; // last mod date
        out.write_u32::<LittleEndian>(self.crc32)?;
        out.write_u32::<LittleEndian>(self.compressed_size)?;
        out.write_u32::<LittleEndian>(self.uncompressed_size)?;
        out.write_u16::<LittleEndian>(self.name.len() as u16)?;
        out.write_u16::<LittleEndian>(0)?; // extra field length
        out.write_u16::<LittleEndian>(0)?; // file comment length
        out.write_u16::<LittleEndian>(0)?; // disk number start
        out.write_u16::<LittleEndian>(0)?; // internal file attributes
        out.write_u32::<LittleEndian>(0)?; // external file attributes
        out.write_u32::<LittleEndian>(self.lfh_offset)?;
        out.write_all(self.name)?;
        Ok(())
    }
}

/// End of Central Directory (EOCD) - exactly 22 bytes, always the last
/// record in the archive (comment length is fixed at 0)
pub struct EndOfCentralDirectory {
    pub total_entries: u16,
    pub cd_size: u32,
    pub cd_offset: u32,
}

impl EndOfCentralDirectory {
    pub const SIGNATURE: &'static [u8] = b"PK\x05\x06";
    pub const SIZE: usize = 22;

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(Self::SIGNATURE)?;
        out.write_u16::<LittleEndian>(0)?; // number of this disk
        out.write_u16::<LittleEndian>(0)?; // disk where central directory starts
        out.write_u16::<LittleEndian>(self.total_entries)?; // entries on this disk
        out.write_u16::<LittleEndian>(self.total_entries)?;
        out.write_u32::<LittleEndian>(self.cd_size)?;
        out.write_u32::<LittleEndian>(self.cd_offset)?;
        out.write_u16::<LittleEndian>(0)?; // comment length
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_header_layout() {
        let header = LocalFileHeader {
            crc32: 0xDEADBEEF,
            compressed_size: 2,
            uncompressed_size: 2,
            name: b"a.txt",
        };
        assert_eq!(header.len(), 35);

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), 35);
        assert_eq!(&buf[0..4], b"PK\x03\x04");
        assert_eq!(&buf[4..6], &20u16.to_le_bytes()); // version needed
        assert_eq!(&buf[8..10], &0u16.to_le_bytes()); // store method
        assert_eq!(&buf[14..18], &0xDEADBEEFu32.to_le_bytes());
        assert_eq!(&buf[18..22], &2u32.to_le_bytes());
        assert_eq!(&buf[22..26], &2u32.to_le_bytes());
        assert_eq!(&buf[26..28], &5u16.to_le_bytes()); // name length
        assert_eq!(&buf[30..], b"a.txt");
    }

    #[test]
    fn central_header_layout() {
        let header = CentralDirectoryHeader {
            crc32: 0x12345678,
            compressed_size: 7,
            uncompressed_size: 7,
            lfh_offset: 0x0000_0125,
            name: b"a.txt",
        };
        assert_eq!(header.len(), 51);

        let mut buf = Vec::new();
        header.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), 51);
        assert_eq!(&buf[0..4], b"PK\x01\x02");
        assert_eq!(&buf[4..6], &20u16.to_le_bytes()); // version made by
        assert_eq!(&buf[6..8], &20u16.to_le_bytes()); // version needed
        assert_eq!(&buf[16..20], &0x12345678u32.to_le_bytes());
        assert_eq!(&buf[42..46], &0x125u32.to_le_bytes());
        assert_eq!(&buf[46..], b"a.txt");
    }

    #[test]
    fn eocd_layout() {
        let eocd = EndOfCentralDirectory {
            total_entries: 3,
            cd_size: 153,
            cd_offset: 421,
        };

        let mut buf = Vec::new();
        eocd.write_to(&mut buf).unwrap();
        assert_eq!(buf.len(), EndOfCentralDirectory::SIZE);
        assert_eq!(&buf[0..4], b"PK\x05\x06");
        assert_eq!(&buf[8..10], &3u16.to_le_bytes());
        assert_eq!(&buf[10..12], &3u16.to_le_bytes());
        assert_eq!(&buf[12..16], &153u32.to_le_bytes());
        assert_eq!(&buf[16..20], &421u32.to_le_bytes());
        assert_eq!(&buf[20..22], &0u16.to_le_bytes()); // no comment
    }
}
