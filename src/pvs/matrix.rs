//! Square bit matrices packed into 32-bit words.

use crate::float_types::Real;

/// Bit `(from, to)` is stored at index `from * size + to`; bit `k` of word
/// `w` is index `w * 32 + k`. Rows are not word aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    words: Vec<u32>,
}

impl BitMatrix {
    /// An all-false `size` × `size` matrix.
    pub fn new(size: usize) -> Self {
        let bit_count = size * size;
        Self {
            size,
            words: vec![0; bit_count.div_ceil(32)],
        }
    }

    /// Wrap packed words, e.g. as read back from a world file.
    ///
    /// Returns `None` if the word count does not fit `size`.
    pub fn from_words(size: usize, words: Vec<u32>) -> Option<Self> {
        ((size * size).div_ceil(32) == words.len()).then_some(Self { size, words })
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    const fn locate(&self, from: usize, to: usize) -> (usize, u32) {
        let bit = from * self.size + to;
        (bit >> 5, 1u32 << (bit & 31))
    }

    /// Marks `to` as visible from `from`.
    #[inline]
    pub fn set(&mut self, from: usize, to: usize) {
        let (word, mask) = self.locate(from, to);
        self.words[word] |= mask;
    }

    /// Returns true if `to` is visible from `from`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> bool {
        let (word, mask) = self.locate(from, to);
        self.words[word] & mask != 0
    }

    /// Sets every bit of row `from` that is `true` in `row`.
    pub fn set_row(&mut self, from: usize, row: &[bool]) {
        for (to, _) in row.iter().enumerate().filter(|(_, v)| **v) {
            self.set(from, to);
        }
    }

    /// All indices visible from `from`, ascending.
    pub fn visible_from(&self, from: usize) -> Vec<usize> {
        (0..self.size).filter(|&to| self.get(from, to)).collect()
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Average number of visible entries per row.
    pub fn average_visibility(&self) -> Real {
        if self.size == 0 {
            return 0.0;
        }
        self.count_ones() as Real / self.size as Real
    }

    /// Size of the packed data in bytes.
    pub fn size_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u32>()
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn into_words(self) -> Vec<u32> {
        self.words
    }
}
