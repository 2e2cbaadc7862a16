use crate::bit::Bit;

/// Accumulates bits in the order they are written.
#[derive(Debug, Default)]
pub struct BitWriter {
    buffer: Vec<Bit>,
}

/// Reads bits front to back from a borrowed sequence without consuming it.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bits: &'a [Bit],
    position: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BitWriter {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn write_bit(&mut self, bit: Bit) {
        self.buffer.push(bit);
    }

    pub fn write_bits(&mut self, bits: &[Bit]) {
        self.buffer.extend_from_slice(bits);
    }

    pub fn into_bits(self) -> Vec<Bit> {
        self.buffer
    }
}

impl<'a> BitReader<'a> {
    pub fn new(bits: &'a [Bit]) -> Self {
        BitReader { bits, position: 0 }
    }

    pub fn read_bit(&mut self) -> Option<Bit> {
        let bit = self.bits.get(self.position).copied()?;
        self.position += 1;
        Some(bit)
    }

    /// Number of bits read so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.bits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bit::parse_bits;

    #[test]
    fn reader_walks_in_fifo_order() {
        let bits = parse_bits("110").unwrap();
        let mut reader = BitReader::new(&bits);

        assert_eq!(reader.read_bit(), Some(Bit::One));
        assert_eq!(reader.read_bit(), Some(Bit::One));
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.read_bit(), Some(Bit::Zero));
        assert_eq!(reader.read_bit(), None);
        assert!(reader.is_exhausted());
        assert_eq!(reader.position(), 3);
        // the source is untouched
        assert_eq!(bits.len(), 3);
    }

    #[test]
    fn writer_concatenates() {
        let mut writer = BitWriter::new();
        writer.write_bit(Bit::One);
        writer.write_bits(&parse_bits("01").unwrap());
        assert_eq!(writer.into_bits(), parse_bits("101").unwrap());
    }
}
