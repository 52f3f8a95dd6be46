//! A fixed-length packed bit array with word-level subrange reversal.

use crate::ops::{self, BitAccess, Reverse, Rotate};
use crate::{bits, reference, Error, Result};

use std::fmt;
use std::iter::{DoubleEndedIterator, ExactSizeIterator, FromIterator, FusedIterator};

use log::debug;
use rand::Rng;


//-----------------------------------------------------------------------------

/// Subranges shorter than this are reversed bit by bit.
///
/// The word-level path has a fixed overhead from handling the ends of the range one bit at a time,
/// which does not pay off for short ranges.
pub const REVERSE_THRESHOLD: usize = 4 * bits::WORD_BITS;

/// A fixed-length array of bits packed into `u64` words.
///
/// Bit `i` is stored as bit `i % 8` of byte `i / 8` in the byte view returned by [`BitArray::to_bytes`].
/// The length is set at construction and never changes.
///
/// Long subranges are reversed 64 bits at a time, and rotations are composed from reversals (see [`Rotate`]).
///
/// # Examples
///
/// ```
/// use everybit::bit_array::BitArray;
/// use everybit::ops::{BitAccess, Reverse, Rotate};
///
/// let mut array = BitArray::new(1000).unwrap();
/// array.set_bit(0, true);
/// array.set_bit(999, true);
/// array.set_bit(10, true);
///
/// array.reverse(0, 1000);
/// assert!(array.bit(0) && array.bit(999) && array.bit(989));
///
/// array.rotate(0, 1000, 11);
/// assert!(array.bit(10) && array.bit(11) && array.bit(0));
/// assert_eq!(array.count_ones(), 3);
/// ```
///
/// # Notes
///
/// * The storage contains one word of padding after the last word in use, so that unaligned word
///   accesses near the end of the array stay within the allocation.
/// * The unused bits after the end of the array are always set to `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitArray {
    bit_len: usize,
    data: Vec<u64>,
}

impl BitArray {
    /// Creates a bit array of the given length with all bits set to `0`.
    ///
    /// Returns [`Error::Allocation`] if the storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use everybit::bit_array::BitArray;
    /// use everybit::ops::BitAccess;
    /// use everybit::Error;
    ///
    /// let array = BitArray::new(137).unwrap();
    /// assert_eq!(array.len(), 137);
    /// assert_eq!(array.count_ones(), 0);
    ///
    /// assert_eq!(BitArray::new(usize::MAX), Err(Error::Allocation { bits: usize::MAX }));
    /// ```
    pub fn new(bit_len: usize) -> Result<BitArray> {
        let words = bits::bits_to_words(bit_len) + 1;
        let mut data: Vec<u64> = Vec::new();
        if let Err(err) = data.try_reserve_exact(words) {
            debug!("Cannot allocate {} words for a {}-bit array: {}", words, bit_len, err);
            return Err(Error::Allocation { bits: bit_len });
        }
        data.resize(words, 0);

        Ok(BitArray {
            bit_len,
            data,
        })
    }

    /// Creates a bit array from its packed byte representation.
    ///
    /// Bit `i` is bit `i % 8` of `bytes[i / 8]`.
    /// Bytes after the first `ceil(bit_len / 8)` and bits after the end of the array are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::NotEnoughBytes`] if `bytes` is too short for `bit_len` bits, or [`Error::Allocation`]
    /// if the storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use everybit::bit_array::BitArray;
    /// use everybit::ops::BitAccess;
    ///
    /// let array = BitArray::from_bytes(12, &[0x01, 0xF8]).unwrap();
    /// assert!(array.bit(0));
    /// assert!(array.bit(11));
    /// assert_eq!(array.count_ones(), 2);
    /// assert!(BitArray::from_bytes(17, &[0x01, 0xF8]).is_err());
    /// ```
    pub fn from_bytes(bit_len: usize, bytes: &[u8]) -> Result<BitArray> {
        let expected = bits::bits_to_bytes(bit_len);
        if bytes.len() < expected {
            return Err(Error::NotEnoughBytes {
                bit_len,
                expected,
                actual: bytes.len(),
            });
        }
        let mut result = BitArray::new(bit_len)?;
        result.load_bytes(&bytes[..expected]);
        Ok(result)
    }

    /// Returns the packed byte representation of the array.
    ///
    /// The result has `ceil(self.len() / 8)` bytes, and the unused bits in the last byte are `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use everybit::bit_array::BitArray;
    /// use everybit::ops::BitAccess;
    ///
    /// let mut array = BitArray::new(10).unwrap();
    /// array.set_bit(1, true);
    /// array.set_bit(9, true);
    /// assert_eq!(array.to_bytes(), vec![0x02, 0x02]);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result: Vec<u8> = Vec::with_capacity(bits::words_to_bits(self.words()) / bits::BYTE_BITS);
        for word in self.data[..self.words()].iter() {
            result.extend_from_slice(&word.to_le_bytes());
        }
        result.truncate(bits::bits_to_bytes(self.len()));
        result
    }

    /// Fills the array with random bits.
    ///
    /// The bits are drawn from `rng` as `ceil(self.len() / 8)` bytes in the order of [`BitArray::to_bytes`].
    /// With a seeded generator, the result is reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use everybit::bit_array::BitArray;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut first = BitArray::new(1000).unwrap();
    /// first.randomize(&mut StdRng::seed_from_u64(42));
    /// let mut second = BitArray::new(1000).unwrap();
    /// second.randomize(&mut StdRng::seed_from_u64(42));
    /// assert_eq!(first, second);
    /// ```
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut bytes = vec![0u8; bits::bits_to_bytes(self.len())];
        rng.fill_bytes(&mut bytes);
        self.load_bytes(&bytes);
    }

    /// Returns the number of bits set in the array.
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns the 64 bits starting at `bit_offset` as an integer.
    ///
    /// Bit `bit_offset + i` of the array becomes bit `i` of the result.
    /// The offset does not need to be a multiple of 64.
    ///
    /// # Examples
    ///
    /// ```
    /// use everybit::bit_array::BitArray;
    ///
    /// let mut array = BitArray::new(256).unwrap();
    /// array.set_word(37, 0x0123_4567_89AB_CDEF);
    /// assert_eq!(array.word(37), 0x0123_4567_89AB_CDEF);
    /// assert_eq!(array.word(41), 0x0012_3456_789A_BCDE);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `bit_offset + 128 > self.len()`.
    pub fn word(&self, bit_offset: usize) -> u64 {
        self.check_word_offset(bit_offset);
        bits::read_word(&self.data, bit_offset)
    }

    /// Writes the 64 bits starting at `bit_offset`.
    ///
    /// Bit `i` of `value` becomes bit `bit_offset + i` of the array.
    /// Other bits are not changed.
    ///
    /// # Panics
    ///
    /// Panics if `bit_offset + 128 > self.len()`.
    pub fn set_word(&mut self, bit_offset: usize, value: u64) {
        self.check_word_offset(bit_offset);
        bits::write_word(&mut self.data, bit_offset, value);
    }

    /// Returns the first position where the arrays differ, or `None` if they are equal.
    ///
    /// If the lengths differ, the result is the length of the shorter array at the latest.
    ///
    /// # Examples
    ///
    /// ```
    /// use everybit::bit_array::BitArray;
    /// use everybit::ops::BitAccess;
    ///
    /// let first = BitArray::new(300).unwrap();
    /// let mut second = first.clone();
    /// assert_eq!(first.first_difference(&second), None);
    /// second.set_bit(200, true);
    /// second.set_bit(250, true);
    /// assert_eq!(first.first_difference(&second), Some(200));
    /// assert_eq!(first.first_difference(&BitArray::new(100).unwrap()), Some(100));
    /// ```
    pub fn first_difference(&self, other: &BitArray) -> Option<usize> {
        let common = std::cmp::min(self.len(), other.len());
        for (index, (a, b)) in self.data.iter().zip(other.data.iter()).enumerate() {
            let diff = a ^ b;
            if diff != 0 {
                let bit_offset = bits::words_to_bits(index) + diff.trailing_zeros() as usize;
                return Some(std::cmp::min(bit_offset, common));
            }
        }
        if self.len() != other.len() {
            Some(common)
        } else {
            None
        }
    }

    /// Returns an iterator over the bits in the array.
    ///
    /// # Examples
    ///
    /// ```
    /// use everybit::bit_array::BitArray;
    ///
    /// let array = BitArray::from_bytes(4, &[0b1001]).unwrap();
    /// let bits: Vec<bool> = array.iter().collect();
    /// assert_eq!(bits, vec![true, false, false, true]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            parent: self,
            next: 0,
            limit: self.len(),
        }
    }

    // Number of words in use, excluding the padding.
    fn words(&self) -> usize {
        bits::bits_to_words(self.len())
    }

    // Copies the bytes into the beginning of the array and clears the unused bits.
    fn load_bytes(&mut self, bytes: &[u8]) {
        for (index, chunk) in bytes.chunks(bits::WORD_BITS / bits::BYTE_BITS).enumerate() {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            self.data[index] = u64::from_le_bytes(buf);
        }
        self.clear_unused_bits();
    }

    // Set the unused bits in the last word to `0`.
    fn clear_unused_bits(&mut self) {
        let (index, width) = bits::split_offset(self.bit_len);
        if width > 0 {
            self.data[index] &= bits::low_set(width);
        }
    }

    fn check_word_offset(&self, bit_offset: usize) {
        let valid = match bit_offset.checked_add(2 * bits::WORD_BITS) {
            Some(end) => end <= self.len(),
            None => false,
        };
        assert!(valid, "Word access at offset {} needs 128 bits in an array of length {}", bit_offset, self.len());
    }
}

//-----------------------------------------------------------------------------

impl BitAccess for BitArray {
    #[inline]
    fn len(&self) -> usize {
        self.bit_len
    }

    #[inline]
    fn bit(&self, index: usize) -> bool {
        assert!(index < self.len(), "Bit index {} out of bounds for length {}", index, self.len());
        let (word, offset) = bits::split_offset(index);
        (self.data[word] & (1u64 << offset)) != 0
    }

    #[inline]
    fn set_bit(&mut self, index: usize, value: bool) {
        assert!(index < self.len(), "Bit index {} out of bounds for length {}", index, self.len());
        let (word, offset) = bits::split_offset(index);
        self.data[word] &= !(1u64 << offset);
        self.data[word] |= (value as u64) << offset;
    }
}

impl Reverse for BitArray {
    fn reverse(&mut self, offset: usize, len: usize) {
        ops::check_range(self.len(), offset, len);
        if len < REVERSE_THRESHOLD {
            reference::reverse(self, offset, len);
            return;
        }

        // Swap the outermost 64 bits at both ends one at a time.
        let mut lp = offset;
        let mut rp = offset + len - 1;
        for _ in 0..bits::WORD_BITS {
            reference::swap_bits(self, lp, rp);
            lp += 1;
            rp -= 1;
        }

        // Now `rp` is the start of the 64-bit window ending at the last unprocessed bit.
        rp -= bits::WORD_BITS - 1;
        while lp + bits::WORD_BITS <= rp {
            let left = bits::read_word(&self.data, lp);
            let right = bits::read_word(&self.data, rp);
            bits::write_word(&mut self.data, lp, bits::reverse_word(right));
            bits::write_word(&mut self.data, rp, bits::reverse_word(left));
            lp += bits::WORD_BITS;
            rp -= bits::WORD_BITS;
        }
        rp += bits::WORD_BITS - 1;

        while lp < rp {
            reference::swap_bits(self, lp, rp);
            lp += 1;
            rp -= 1;
        }
    }
}

impl Rotate for BitArray {}

//-----------------------------------------------------------------------------

impl Default for BitArray {
    fn default() -> Self {
        BitArray {
            bit_len: 0,
            data: vec![0],
        }
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bit_len = 0;
        let mut data: Vec<u64> = Vec::new();
        for bit in iter {
            let (index, offset) = bits::split_offset(bit_len);
            if index == data.len() {
                data.push(0);
            }
            data[index] |= (bit as u64) << offset;
            bit_len += 1;
        }
        data.push(0);

        BitArray {
            bit_len,
            data,
        }
    }
}

impl<'a> IntoIterator for &'a BitArray {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//-----------------------------------------------------------------------------

/// A read-only iterator over the bits of a [`BitArray`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    parent: &'a BitArray,
    // The first index we have not visited.
    next: usize,
    // The first index we should not visit.
    limit: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.limit {
            None
        } else {
            let result = Some(self.parent.bit(self.next));
            self.next += 1;
            result
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.limit {
            None
        } else {
            self.limit -= 1;
            Some(self.parent.bit(self.limit))
        }
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

//-----------------------------------------------------------------------------
