//! Frequency analysis over raw byte sources.

use std::io::{self, Read};

use crate::huffman::{Symbol, ALPHABET, EOF};

/// Occurrence counts per symbol, built from one pass over the input.
///
/// The table is backed by a fixed array so iteration always proceeds in
/// ascending symbol order; tree construction relies on that determinism.
/// The [`EOF`](crate::huffman::EOF) sentinel is always present with count 1,
/// so the table is never empty and the derived tree always has a path to an
/// EOF leaf.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET],
}

impl FrequencyTable {
    /// Counts every byte of `data`, then adds the EOF sentinel.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        counts[EOF as usize] = 1;
        FrequencyTable { counts }
    }

    /// Counts every byte read from `source` to exhaustion, then adds the
    /// EOF sentinel.
    pub fn from_reader<R: Read>(mut source: R) -> io::Result<Self> {
        let mut counts = [0u64; ALPHABET];
        let mut buf = [0u8; 8192];
        loop {
            match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    for &byte in &buf[..n] {
                        counts[byte as usize] += 1;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        counts[EOF as usize] = 1;
        Ok(FrequencyTable { counts })
    }

    /// Returns the occurrence count for `symbol`.
    pub fn count(&self, symbol: Symbol) -> u64 {
        self.counts[symbol as usize]
    }

    /// Iterates the symbols with nonzero counts, in ascending symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as Symbol, count))
    }

    /// Number of distinct symbols present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_byte() {
        let table = FrequencyTable::from_bytes(b"aabccc");
        assert_eq!(table.count(b'a' as Symbol), 2);
        assert_eq!(table.count(b'b' as Symbol), 1);
        assert_eq!(table.count(b'c' as Symbol), 3);
        assert_eq!(table.count(b'd' as Symbol), 0);
    }

    #[test]
    fn test_eof_always_present_once() {
        let table = FrequencyTable::from_bytes(b"some input");
        assert_eq!(table.count(EOF), 1);
    }

    #[test]
    fn test_empty_input_is_singleton_eof_table() {
        let table = FrequencyTable::from_bytes(b"");
        assert_eq!(table.distinct(), 1);
        assert_eq!(table.count(EOF), 1);
    }

    #[test]
    fn test_symbols_iterate_in_ascending_order() {
        let table = FrequencyTable::from_bytes(&[0xFF, 0x00, 0x41]);
        let symbols: Vec<Symbol> = table.symbols().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![0x00, 0x41, 0xFF, EOF]);
    }

    #[test]
    fn test_reader_matches_slice_scan() {
        let data = b"the quick brown fox";
        let from_reader = FrequencyTable::from_reader(data.as_slice()).unwrap();
        let from_bytes = FrequencyTable::from_bytes(data);
        for symbol in 0..ALPHABET as Symbol {
            assert_eq!(from_reader.count(symbol), from_bytes.count(symbol));
        }
    }
}
