//! Validity bitmap for table columns
//!
//! One bit per cell; a set bit means the cell holds a value. Missingness is
//! tracked here rather than with an in-band marker so that every `f64` and
//! every string remains a legal value.

const WORD_BITS: usize = u64::BITS as usize;

/// Packed validity bitmap
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    words: Vec<u64>,
    len: usize,
}

impl Bitmap {
    /// Bitmap of `len` cells, all valid
    pub fn all_valid(len: usize) -> Self {
        let mut words = vec![u64::MAX; len.div_ceil(WORD_BITS)];
        let tail = len % WORD_BITS;
        if tail != 0 {
            if let Some(last) = words.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        Self { words, len }
    }

    /// Number of cells tracked
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether cell `index` holds a value
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bitmap index {index} out of bounds ({})", self.len);
        self.words[index / WORD_BITS] >> (index % WORD_BITS) & 1 == 1
    }

    /// Mark cell `index` valid or missing
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, valid: bool) {
        assert!(index < self.len, "bitmap index {index} out of bounds ({})", self.len);
        let mask = 1u64 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if valid {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Append one cell
    pub fn push(&mut self, valid: bool) {
        if self.len % WORD_BITS == 0 {
            self.words.push(0);
        }
        self.len += 1;
        self.set(self.len - 1, valid);
    }

    /// Number of valid cells
    pub fn count_valid(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of missing cells
    pub fn count_missing(&self) -> usize {
        self.len - self.count_valid()
    }

    /// Iterate over validity flags in cell order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    /// Indices of missing cells
    pub fn missing_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&i| !self.get(i))
    }
}

impl FromIterator<bool> for Bitmap {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bitmap = Bitmap::default();
        for valid in iter {
            bitmap.push(valid);
        }
        bitmap
    }
}
