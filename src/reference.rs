//! Bit-by-bit reversal and rotation.
//!
//! These are the obvious algorithms built on [`BitAccess`] alone.
//! They are slow but easy to verify, and they serve as ground truth for the word-level implementations.
//! [`rotate_left`] in particular does not use reversals at all.

use crate::ops::{self, BitAccess};

//-----------------------------------------------------------------------------

/// Swaps the bits at positions `a` and `b`.
///
/// # Panics
///
/// Panics if either position is out of bounds.
#[inline]
pub fn swap_bits<T: BitAccess + ?Sized>(bits: &mut T, a: usize, b: usize) {
    let left = bits.bit(a);
    let right = bits.bit(b);
    bits.set_bit(a, right);
    bits.set_bit(b, left);
}

/// Reverses the bits in the range `offset..offset + len` by swapping pairs from both ends inward.
///
/// # Examples
///
/// ```
/// use everybit::bit_array::BitArray;
/// use everybit::reference;
///
/// let mut array: BitArray = "1101000".chars().map(|c| c == '1').collect();
/// reference::reverse(&mut array, 1, 5);
/// assert_eq!(array.to_string(), "1001010");
/// ```
///
/// # Panics
///
/// Panics if `offset + len > bits.len()`.
pub fn reverse<T: BitAccess + ?Sized>(bits: &mut T, offset: usize, len: usize) {
    ops::check_range(bits.len(), offset, len);
    if len < 2 {
        return;
    }
    let mut lp = offset;
    let mut rp = offset + len - 1;
    while lp < rp {
        swap_bits(bits, lp, rp);
        lp += 1;
        rp -= 1;
    }
}

/// Rotates the bits in the range `offset..offset + len` to the left by one position.
///
/// Every bit moves one position down and the first bit of the range moves to the end.
///
/// # Panics
///
/// Panics if `offset + len > bits.len()`.
pub fn rotate_left_one<T: BitAccess + ?Sized>(bits: &mut T, offset: usize, len: usize) {
    ops::check_range(bits.len(), offset, len);
    if len < 2 {
        return;
    }
    let first = bits.bit(offset);
    for i in offset..(offset + len - 1) {
        let next = bits.bit(i + 1);
        bits.set_bit(i, next);
    }
    bits.set_bit(offset + len - 1, first);
}

/// Rotates the bits in the range `offset..offset + len` to the left by `left_amount` positions, one position at a time.
///
/// This takes time proportional to `len * left_amount`.
///
/// # Examples
///
/// ```
/// use everybit::bit_array::BitArray;
/// use everybit::reference;
///
/// let mut array: BitArray = "0011100".chars().map(|c| c == '1').collect();
/// reference::rotate_left(&mut array, 0, 7, 2);
/// assert_eq!(array.to_string(), "1110000");
/// ```
///
/// # Panics
///
/// Panics if `offset + len > bits.len()` or `left_amount > len`.
pub fn rotate_left<T: BitAccess + ?Sized>(bits: &mut T, offset: usize, len: usize, left_amount: usize) {
    ops::check_range(bits.len(), offset, len);
    assert!(left_amount <= len, "Rotation amount {} exceeds the range length {}", left_amount, len);
    for _ in 0..left_amount {
        rotate_left_one(bits, offset, len);
    }
}

/// Rotates the bits in the range `offset..offset + len` to the left by `left_amount` positions using three bit-by-bit reversals.
///
/// # Panics
///
/// Panics if `offset + len > bits.len()` or `left_amount > len`.
pub fn rotate_left_by_reversal<T: BitAccess + ?Sized>(bits: &mut T, offset: usize, len: usize, left_amount: usize) {
    ops::check_range(bits.len(), offset, len);
    assert!(left_amount <= len, "Rotation amount {} exceeds the range length {}", left_amount, len);
    reverse(bits, offset, left_amount);
    reverse(bits, offset + left_amount, len - left_amount);
    reverse(bits, offset, len);
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
