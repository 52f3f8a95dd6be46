//! Operations on packed bit arrays.
//!
//! The traits form a hierarchy: [`BitAccess`] for single bits, [`Reverse`] for reversing subranges,
//! and [`Rotate`] for rotating them.
//! Default implementations only rely on single-bit access, which makes them usable as a reference
//! for implementations that override them with faster versions.

use crate::reference;

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

/// Access to individual bits of a fixed-length bit array.
///
/// # Examples
///
/// ```
/// use everybit::ops::BitAccess;
///
/// struct Example(Vec<bool>);
///
/// impl BitAccess for Example {
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn bit(&self, index: usize) -> bool {
///         self.0[index]
///     }
///
///     fn set_bit(&mut self, index: usize, value: bool) {
///         self.0[index] = value;
///     }
/// }
///
/// let mut example = Example(vec![false; 4]);
/// example.set_bit(2, true);
/// assert!(example.bit(2));
/// assert!(!example.is_empty());
/// ```
pub trait BitAccess {
    /// Returns the length of the array in bits.
    fn len(&self) -> usize;

    /// Returns `true` if the array is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads a bit.
    ///
    /// # Panics
    ///
    /// Implementations should panic if `index >= self.len()`.
    fn bit(&self, index: usize) -> bool;

    /// Writes a bit without changing the other bits.
    ///
    /// # Panics
    ///
    /// Implementations should panic if `index >= self.len()`.
    fn set_bit(&mut self, index: usize, value: bool);
}

/// Reversal of the bit order in a subrange.
///
/// The default implementation swaps bits one pair at a time.
///
/// # Examples
///
/// ```
/// use everybit::bit_array::BitArray;
/// use everybit::ops::{BitAccess, Reverse};
///
/// let mut array = BitArray::from_bytes(8, &[0b0000_0011]).unwrap();
/// array.reverse(0, 5);
/// assert_eq!(array.to_bytes(), vec![0b0001_1000]);
/// ```
pub trait Reverse: BitAccess {
    /// Reverses the bits in the half-open range `offset..offset + len`.
    ///
    /// Afterwards the bit originally at `offset + i` is at `offset + len - 1 - i`.
    /// Bits outside the range are not changed.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    fn reverse(&mut self, offset: usize, len: usize) {
        check_range(self.len(), offset, len);
        reference::reverse(self, offset, len);
    }
}

/// Rotation of a subrange.
///
/// The default implementations compose three reversals, so they run in time linear in the length
/// of the range and use no extra space.
///
/// # Examples
///
/// ```
/// use everybit::bit_array::BitArray;
/// use everybit::ops::{BitAccess, Rotate};
///
/// let mut array: BitArray = "11000000".chars().map(|c| c == '1').collect();
/// array.rotate_left(0, 8, 1);
/// assert_eq!(array.to_string(), "10000001");
/// array.rotate(2, 6, 2);
/// assert_eq!(array.to_string(), "10010000");
/// ```
pub trait Rotate: Reverse {
    /// Rotates the bits in the range `offset..offset + len` to the left by `left_amount` positions.
    ///
    /// The bit at `offset + left_amount` moves to `offset`, and the bit at `offset` moves to
    /// `offset + len - left_amount`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()` or `left_amount > len`.
    fn rotate_left(&mut self, offset: usize, len: usize, left_amount: usize) {
        check_range(self.len(), offset, len);
        assert!(left_amount <= len, "Rotation amount {} exceeds the range length {}", left_amount, len);
        self.reverse(offset, left_amount);
        self.reverse(offset + left_amount, len - left_amount);
        self.reverse(offset, len);
    }

    /// Rotates the bits in the range `offset..offset + len` to the right by `right_amount` positions.
    ///
    /// A negative amount rotates to the left.
    /// The amount is reduced modulo `len`, and rotating an empty range does nothing.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    fn rotate(&mut self, offset: usize, len: usize, right_amount: isize) {
        check_range(self.len(), offset, len);
        if len == 0 {
            return;
        }
        let left_amount = modulo(-(right_amount as i128), len);
        self.rotate_left(offset, len, left_amount);
    }
}

//-----------------------------------------------------------------------------

/// Returns `n` modulo `m` as a value in `0..m`, also for negative `n`.
///
/// # Examples
///
/// ```
/// use everybit::ops;
///
/// assert_eq!(ops::modulo(7, 5), 2);
/// assert_eq!(ops::modulo(-1, 5), 4);
/// assert_eq!(ops::modulo(-10, 5), 0);
/// ```
///
/// # Panics
///
/// Panics if `m == 0`.
pub fn modulo(n: i128, m: usize) -> usize {
    assert!(m > 0, "Modulo by zero");
    n.rem_euclid(m as i128) as usize
}

// Panics unless `offset..offset + len` is a valid range in an array of `bit_len` bits.
pub(crate) fn check_range(bit_len: usize, offset: usize, len: usize) {
    let valid = match offset.checked_add(len) {
        Some(end) => end <= bit_len,
        None => false,
    };
    assert!(valid, "Range of {} bits at offset {} exceeds the array length {}", len, offset, bit_len);
}

//-----------------------------------------------------------------------------
