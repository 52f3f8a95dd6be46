//! # Packed bit arrays with fast subrange rotation
//!
//! A fixed-length array of bits packed into 64-bit words, supporting single-bit access and in-place
//! reversal and rotation of arbitrary subranges.
//! Long subranges are reversed a word at a time using a bit-reversal lookup table, and rotation is
//! composed from three reversals.
//!
//! The straightforward bit-by-bit algorithms are available in [`reference`] for validating the fast paths.
//!
//! # Example
//!
//! ```
//! use everybit::bit_array::BitArray;
//! use everybit::ops::{BitAccess, Rotate};
//!
//! let mut array = BitArray::from_bytes(16, &[0b0000_0001, 0b0000_0000]).unwrap();
//! array.rotate(0, 16, 3);
//! assert!(array.bit(3));
//! array.rotate(0, 16, -3);
//! assert!(array.bit(0));
//! ```
//!
//! # Notes
//!
//! * A bit array is not synchronized. Mutation requires exclusive access.
//! * Precondition violations (out-of-range indexes or subranges) panic.

pub mod bit_array;
pub mod bits;
pub mod ops;
pub mod reference;

#[cfg(any(test, feature = "bench"))]
#[doc(hidden)]
pub mod internal;

//-----------------------------------------------------------------------------

/// Shorthand `Result` alias for this crate's operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Recoverable errors from constructing bit arrays.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The storage for a bit array could not be allocated.
    #[error("cannot allocate storage for {bits} bits")]
    Allocation { bits: usize },

    /// The byte buffer is too short for the requested length.
    #[error("{bit_len} bits need {expected} bytes, got {actual}")]
    NotEnoughBytes { bit_len: usize, expected: usize, actual: usize },
}

//-----------------------------------------------------------------------------
