use std::io::Cursor;

use bitstream_io::{BitRead, BitReader, BitWrite, BitWriter, LittleEndian};

/// an ordered, finite sequence of bits, indexed `0..len()`
///
/// This is the linear form every payload takes before dispersal:
/// [`BitPlaneCodec`](crate::BitPlaneCodec) produces one from a monochrome
/// image, byte payloads enter through [`BitStream::from_bytes`] in
/// little endian bit order.
///
/// ## Example of usage
/// ```rust
/// use qrstego::BitStream;
///
/// let bits = BitStream::from_bytes(&[0b0100_1000]);
/// assert_eq!(bits.len(), 8);
/// assert!(!bits[0], "1st bit not correct");
/// assert!(bits[3], "4th bit not correct");
/// assert_eq!(bits.to_bytes(), vec![0b0100_1000]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<bool>,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// reads every bit of `bytes`, least significant bit of each byte first
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut reader = BitReader::endian(Cursor::new(bytes), LittleEndian);
        let mut bits = Vec::with_capacity(bytes.len() * 8);
        while let Ok(bit) = reader.read_bit() {
            bits.push(bit);
        }
        Self { bits }
    }

    /// packs the bits back into bytes, the last byte is zero padded
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = BitWriter::endian(Vec::new(), LittleEndian);
        for bit in self.iter() {
            writer
                .write_bit(bit)
                .expect("writing a bit to a Vec cannot fail");
        }
        writer
            .byte_align()
            .expect("aligning the last byte cannot fail");

        writer.into_writer()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl From<Vec<bool>> for BitStream {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for BitStream {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<usize> for BitStream {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl<'a> IntoIterator for &'a BitStream {
    type Item = bool;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_the_bits_of_h_in_little_endian_byte_order() {
        let bits = BitStream::from_bytes(&[0b0100_1000]);

        let expected = [false, false, false, true, false, false, true, false];
        for (i, bit) in expected.iter().enumerate() {
            assert_eq!(bits[i], *bit, "{}th bit not correct", i + 1);
        }
    }

    #[test]
    fn should_agree_with_the_bit_reader_on_multiple_bytes() {
        let bytes = [0b0100_1000, 0b0110_0001, 0b0110_1100];
        let bits = BitStream::from_bytes(&bytes);
        let mut reader = BitReader::endian(Cursor::new(&bytes[..]), LittleEndian);

        assert_eq!(bits.len(), 24);
        for (i, bit) in bits.iter().enumerate() {
            assert_eq!(bit, reader.read_bit().unwrap(), "{i} bit not correct");
        }
    }

    #[test]
    fn should_roundtrip_bytes() {
        let bytes = b"Hello World!";
        assert_eq!(BitStream::from_bytes(bytes).to_bytes(), bytes.to_vec());
    }

    #[test]
    fn should_zero_pad_the_last_byte() {
        let bits: BitStream = vec![true, false, true].into();
        assert_eq!(bits.to_bytes(), vec![0b0000_0101]);
    }

    #[test]
    fn should_collect_from_an_iterator() {
        let bits: BitStream = (0..4).map(|i| i % 2 == 0).collect();
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(3), Some(false));
        assert_eq!(bits.get(4), None);
    }
}
