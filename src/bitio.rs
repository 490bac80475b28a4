//! Bit-level I/O adapters over byte streams.
//!
//! Both sides work MSB-first within each byte. The writer pads an
//! incomplete trailing byte with zero bits when finished; the reader reports
//! end-of-stream exactly once every bit (including any zero padding) has
//! been consumed.

use std::io::{self, Read, Write};

/// Sequential bit writer over any [`Write`] sink.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    cur: u8,
    /// Bit position of the next write within `cur`, counting down from 7.
    pos: i8,
}

impl<W: Write> BitWriter<W> {
    /// Creates a writer that accumulates bits into `inner`.
    pub fn new(inner: W) -> Self {
        BitWriter {
            inner,
            cur: 0,
            pos: 7,
        }
    }

    /// Writes a single bit. Any nonzero `bit` is treated as 1.
    pub fn write_bit(&mut self, bit: u8) -> io::Result<()> {
        if bit != 0 {
            self.cur |= 1 << self.pos;
        }
        self.pos -= 1;
        if self.pos < 0 {
            self.inner.write_all(&[self.cur])?;
            self.cur = 0;
            self.pos = 7;
        }
        Ok(())
    }

    /// Writes the low `n` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, n: u32) -> io::Result<()> {
        debug_assert!(n <= 32);
        for i in (0..n).rev() {
            self.write_bit(((value >> i) & 1) as u8)?;
        }
        Ok(())
    }

    /// Pads the trailing byte with zero bits, flushes the underlying sink,
    /// and returns it.
    pub fn finish(mut self) -> io::Result<W> {
        if self.pos < 7 {
            self.inner.write_all(&[self.cur])?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Sequential bit reader over any [`Read`] source.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    inner: R,
    cur: u8,
    /// Number of unread bits left in `cur`.
    remaining: u8,
}

impl<R: Read> BitReader<R> {
    /// Creates a reader that consumes bits from `inner`.
    pub fn new(inner: R) -> Self {
        BitReader {
            inner,
            cur: 0,
            remaining: 0,
        }
    }

    /// Pulls the next byte from the source; returns false at end-of-stream.
    fn fill(&mut self) -> io::Result<bool> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(false),
                Ok(_) => {
                    self.cur = byte[0];
                    self.remaining = 8;
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Reads one bit, or `None` once the stream is exhausted.
    pub fn read_bit(&mut self) -> io::Result<Option<u8>> {
        if self.remaining == 0 && !self.fill()? {
            return Ok(None);
        }
        self.remaining -= 1;
        Ok(Some((self.cur >> self.remaining) & 1))
    }

    /// Reads `n` bits into an integer, most significant first.
    ///
    /// Returns `None` if the stream runs out before all `n` bits are read,
    /// matching the all-or-nothing contract of the wire format fields.
    pub fn read_bits(&mut self, n: u32) -> io::Result<Option<u32>> {
        debug_assert!(n <= 32);
        let mut value = 0u32;
        for _ in 0..n {
            match self.read_bit()? {
                Some(bit) => value = (value << 1) | u32::from(bit),
                None => return Ok(None),
            }
        }
        Ok(Some(value))
    }

    /// Reports whether at least one more bit can be read.
    pub fn has_more_bits(&mut self) -> io::Result<bool> {
        if self.remaining > 0 {
            return Ok(true);
        }
        self.fill()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_bits() {
        let mut w = BitWriter::new(Vec::new());
        w.write_bits(0b1011, 4).unwrap();
        w.write_bits(0xFACE_B00C, 32).unwrap();
        w.write_bit(1).unwrap();
        let buf = w.finish().unwrap();

        let mut r = BitReader::new(buf.as_slice());
        assert_eq!(r.read_bits(4).unwrap(), Some(0b1011));
        assert_eq!(r.read_bits(32).unwrap(), Some(0xFACE_B00C));
        assert_eq!(r.read_bit().unwrap(), Some(1));
    }

    #[test]
    fn test_trailing_byte_is_zero_padded() {
        let mut w = BitWriter::new(Vec::new());
        w.write_bits(0b101, 3).unwrap();
        let buf = w.finish().unwrap();
        assert_eq!(buf, vec![0b1010_0000]);
    }

    #[test]
    fn test_msb_first_within_a_byte() {
        let mut w = BitWriter::new(Vec::new());
        for bit in [1, 0, 0, 0, 0, 0, 0, 1] {
            w.write_bit(bit).unwrap();
        }
        assert_eq!(w.finish().unwrap(), vec![0b1000_0001]);
    }

    #[test]
    fn test_end_of_stream_reported_once_exhausted() {
        let data = [0xFFu8];
        let mut r = BitReader::new(data.as_slice());
        for _ in 0..8 {
            assert!(r.has_more_bits().unwrap());
            assert_eq!(r.read_bit().unwrap(), Some(1));
        }
        assert!(!r.has_more_bits().unwrap());
        assert_eq!(r.read_bit().unwrap(), None);
    }

    #[test]
    fn test_read_bits_is_all_or_nothing() {
        // 12 bits available, a 16-bit field must not be served.
        let data = [0xABu8, 0xCD];
        let mut r = BitReader::new(data.as_slice());
        assert_eq!(r.read_bits(4).unwrap(), Some(0xA));
        assert_eq!(r.read_bits(16).unwrap(), None);
    }

    #[test]
    fn test_empty_source_has_no_bits() {
        let data: [u8; 0] = [];
        let mut r = BitReader::new(data.as_slice());
        assert!(!r.has_more_bits().unwrap());
        assert_eq!(r.read_bits(32).unwrap(), None);
    }
}
