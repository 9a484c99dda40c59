//! Reset line table.
//!
//! Decodes the `ti,reset-bits` description: a sequence of big-endian 32-bit
//! words, seven per line, in binding order. Line `i` is the `i`-th group.

extern crate alloc;
use alloc::boxed::Box;

use crate::control::{ResetControl, WORDS_PER_CONTROL};
use crate::error::{ResetError, Result};

const WORD_SIZE: usize = 4;

/// Bytes describing one line.
pub const BYTES_PER_CONTROL: usize = WORD_SIZE * WORDS_PER_CONTROL;

/// Immutable, index-addressed table of reset controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetTable {
    controls: Box<[ResetControl]>,
}

impl ResetTable {
    /// Decode a raw description blob.
    ///
    /// Fails with [`ResetError::MalformedDescription`] if the blob is empty,
    /// not a whole number of words, or not a whole number of 7-word groups.
    pub fn decode(blob: &[u8]) -> Result<Self> {
        if blob.is_empty()
            || blob.len() % WORD_SIZE != 0
            || (blob.len() / WORD_SIZE) % WORDS_PER_CONTROL != 0
        {
            log::warn!("ti-syscon reset: invalid reset description ({} bytes)", blob.len());
            return Err(ResetError::MalformedDescription);
        }

        let controls = blob
            .chunks_exact(BYTES_PER_CONTROL)
            .map(|group| {
                let mut words = [0u32; WORDS_PER_CONTROL];
                for (word, bytes) in words.iter_mut().zip(group.chunks_exact(WORD_SIZE)) {
                    *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                }
                ResetControl::from_words(words)
            })
            .collect();

        Ok(Self { controls })
    }

    /// Control for line `id`.
    pub fn get(&self, id: usize) -> Result<&ResetControl> {
        self.controls.get(id).ok_or(ResetError::OutOfRange)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Always false for a decoded table.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn as_slice(&self) -> &[ResetControl] {
        &self.controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::RegBit;
    use crate::flags::*;
    use std::vec::Vec;

    fn blob(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_be_bytes()).collect()
    }

    #[test]
    fn test_decode_single_line() {
        let table = ResetTable::decode(&blob(&[0x10, 2, 0x10, 2, 0x14, 0, ASSERT_SET | STATUS_SET])).unwrap();

        assert_eq!(table.len(), 1);
        let control = table.get(0).unwrap();
        assert_eq!(control.assert, RegBit::new(0x10, 2));
        assert_eq!(control.deassert, RegBit::new(0x10, 2));
        assert_eq!(control.status, RegBit::new(0x14, 0));
        assert_eq!(control.flags, 0x11);
    }

    #[test]
    fn test_decode_preserves_order() {
        let mut words = Vec::new();
        for i in 0..5u32 {
            words.extend_from_slice(&[0x100 + i * 4, i, 0x200 + i * 4, i + 8, 0x300, i + 16, i]);
        }
        let table = ResetTable::decode(&blob(&words)).unwrap();

        assert_eq!(table.len(), 5);
        for (i, control) in table.as_slice().iter().enumerate() {
            let i = i as u32;
            assert_eq!(control.assert, RegBit::new(0x100 + i * 4, i));
            assert_eq!(control.deassert, RegBit::new(0x200 + i * 4, i + 8));
            assert_eq!(control.status, RegBit::new(0x300, i + 16));
            assert_eq!(control.flags, i);
        }
    }

    #[test]
    fn test_decode_is_big_endian() {
        let table = ResetTable::decode(&blob(&[0x0102_0304, 0, 0, 0, 0, 0, 0])).unwrap();
        assert_eq!(table.get(0).unwrap().assert.offset, 0x0102_0304);
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert_eq!(ResetTable::decode(&[]), Err(ResetError::MalformedDescription));
        assert_eq!(ResetTable::decode(&[0; 27]), Err(ResetError::MalformedDescription));
        assert_eq!(ResetTable::decode(&[0; 29]), Err(ResetError::MalformedDescription));
        assert_eq!(ResetTable::decode(&[0; 24]), Err(ResetError::MalformedDescription));
        assert_eq!(ResetTable::decode(&[0; 32]), Err(ResetError::MalformedDescription));
        assert_eq!(ResetTable::decode(&[0; 4]), Err(ResetError::MalformedDescription));
    }

    #[test]
    fn test_accepts_whole_groups() {
        for lines in 1..=4 {
            let table = ResetTable::decode(&std::vec![0u8; lines * BYTES_PER_CONTROL]).unwrap();
            assert_eq!(table.len(), lines);
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let table = ResetTable::decode(&[0; BYTES_PER_CONTROL]).unwrap();
        assert!(table.get(0).is_ok());
        assert_eq!(table.get(1), Err(ResetError::OutOfRange));
        assert_eq!(table.get(usize::MAX), Err(ResetError::OutOfRange));
    }
}
