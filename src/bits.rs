//! Low-level functions for bit manipulation.
//!
//! Bits are stored in arrays of `u64` using the least significant bits first.
//! Bit offset `i` is bit `i % 64` of word `i / 64`, which is bit `i % 8` of byte `i / 8` in the little-endian byte view.

//-----------------------------------------------------------------------------

/// Number of bits in `u64`.
pub const WORD_BITS: usize = 64;

/// Number of bits in `u8`.
pub const BYTE_BITS: usize = 8;

// Bit shift for transforming a bit offset into an array index.
const INDEX_SHIFT: usize = 6;

// Bit mask for transforming a bit offset into an offset in `u64`.
const OFFSET_MASK: usize = 0b111111;

//-----------------------------------------------------------------------------

const LOW_SET: [u64; 65] = [
    0x0000_0000_0000_0000,

    0x0000_0000_0000_0001, 0x0000_0000_0000_0003, 0x0000_0000_0000_0007, 0x0000_0000_0000_000F,
    0x0000_0000_0000_001F, 0x0000_0000_0000_003F, 0x0000_0000_0000_007F, 0x0000_0000_0000_00FF,
    0x0000_0000_0000_01FF, 0x0000_0000_0000_03FF, 0x0000_0000_0000_07FF, 0x0000_0000_0000_0FFF,
    0x0000_0000_0000_1FFF, 0x0000_0000_0000_3FFF, 0x0000_0000_0000_7FFF, 0x0000_0000_0000_FFFF,

    0x0000_0000_0001_FFFF, 0x0000_0000_0003_FFFF, 0x0000_0000_0007_FFFF, 0x0000_0000_000F_FFFF,
    0x0000_0000_001F_FFFF, 0x0000_0000_003F_FFFF, 0x0000_0000_007F_FFFF, 0x0000_0000_00FF_FFFF,
    0x0000_0000_01FF_FFFF, 0x0000_0000_03FF_FFFF, 0x0000_0000_07FF_FFFF, 0x0000_0000_0FFF_FFFF,
    0x0000_0000_1FFF_FFFF, 0x0000_0000_3FFF_FFFF, 0x0000_0000_7FFF_FFFF, 0x0000_0000_FFFF_FFFF,

    0x0000_0001_FFFF_FFFF, 0x0000_0003_FFFF_FFFF, 0x0000_0007_FFFF_FFFF, 0x0000_000F_FFFF_FFFF,
    0x0000_001F_FFFF_FFFF, 0x0000_003F_FFFF_FFFF, 0x0000_007F_FFFF_FFFF, 0x0000_00FF_FFFF_FFFF,
    0x0000_01FF_FFFF_FFFF, 0x0000_03FF_FFFF_FFFF, 0x0000_07FF_FFFF_FFFF, 0x0000_0FFF_FFFF_FFFF,
    0x0000_1FFF_FFFF_FFFF, 0x0000_3FFF_FFFF_FFFF, 0x0000_7FFF_FFFF_FFFF, 0x0000_FFFF_FFFF_FFFF,

    0x0001_FFFF_FFFF_FFFF, 0x0003_FFFF_FFFF_FFFF, 0x0007_FFFF_FFFF_FFFF, 0x000F_FFFF_FFFF_FFFF,
    0x001F_FFFF_FFFF_FFFF, 0x003F_FFFF_FFFF_FFFF, 0x007F_FFFF_FFFF_FFFF, 0x00FF_FFFF_FFFF_FFFF,
    0x01FF_FFFF_FFFF_FFFF, 0x03FF_FFFF_FFFF_FFFF, 0x07FF_FFFF_FFFF_FFFF, 0x0FFF_FFFF_FFFF_FFFF,
    0x1FFF_FFFF_FFFF_FFFF, 0x3FFF_FFFF_FFFF_FFFF, 0x7FFF_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF,
];

const HIGH_SET: [u64; 65] = [
    0x0000_0000_0000_0000,

    0x8000_0000_0000_0000, 0xC000_0000_0000_0000, 0xE000_0000_0000_0000, 0xF000_0000_0000_0000,
    0xF800_0000_0000_0000, 0xFC00_0000_0000_0000, 0xFE00_0000_0000_0000, 0xFF00_0000_0000_0000,
    0xFF80_0000_0000_0000, 0xFFC0_0000_0000_0000, 0xFFE0_0000_0000_0000, 0xFFF0_0000_0000_0000,
    0xFFF8_0000_0000_0000, 0xFFFC_0000_0000_0000, 0xFFFE_0000_0000_0000, 0xFFFF_0000_0000_0000,

    0xFFFF_8000_0000_0000, 0xFFFF_C000_0000_0000, 0xFFFF_E000_0000_0000, 0xFFFF_F000_0000_0000,
    0xFFFF_F800_0000_0000, 0xFFFF_FC00_0000_0000, 0xFFFF_FE00_0000_0000, 0xFFFF_FF00_0000_0000,
    0xFFFF_FF80_0000_0000, 0xFFFF_FFC0_0000_0000, 0xFFFF_FFE0_0000_0000, 0xFFFF_FFF0_0000_0000,
    0xFFFF_FFF8_0000_0000, 0xFFFF_FFFC_0000_0000, 0xFFFF_FFFE_0000_0000, 0xFFFF_FFFF_0000_0000,

    0xFFFF_FFFF_8000_0000, 0xFFFF_FFFF_C000_0000, 0xFFFF_FFFF_E000_0000, 0xFFFF_FFFF_F000_0000,
    0xFFFF_FFFF_F800_0000, 0xFFFF_FFFF_FC00_0000, 0xFFFF_FFFF_FE00_0000, 0xFFFF_FFFF_FF00_0000,
    0xFFFF_FFFF_FF80_0000, 0xFFFF_FFFF_FFC0_0000, 0xFFFF_FFFF_FFE0_0000, 0xFFFF_FFFF_FFF0_0000,
    0xFFFF_FFFF_FFF8_0000, 0xFFFF_FFFF_FFFC_0000, 0xFFFF_FFFF_FFFE_0000, 0xFFFF_FFFF_FFFF_0000,

    0xFFFF_FFFF_FFFF_8000, 0xFFFF_FFFF_FFFF_C000, 0xFFFF_FFFF_FFFF_E000, 0xFFFF_FFFF_FFFF_F000,
    0xFFFF_FFFF_FFFF_F800, 0xFFFF_FFFF_FFFF_FC00, 0xFFFF_FFFF_FFFF_FE00, 0xFFFF_FFFF_FFFF_FF00,
    0xFFFF_FFFF_FFFF_FF80, 0xFFFF_FFFF_FFFF_FFC0, 0xFFFF_FFFF_FFFF_FFE0, 0xFFFF_FFFF_FFFF_FFF0,
    0xFFFF_FFFF_FFFF_FFF8, 0xFFFF_FFFF_FFFF_FFFC, 0xFFFF_FFFF_FFFF_FFFE, 0xFFFF_FFFF_FFFF_FFFF,
];

// Bit-reversed bytes: `BIT_REVERSE[b]` has the bits of `b` in the opposite order.
const BIT_REVERSE: [u8; 256] = bit_reverse_table();

const fn bit_reverse_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut byte = 0;
    while byte < 256 {
        let mut source = byte as u8;
        let mut reversed = 0u8;
        let mut i = 0;
        while i < BYTE_BITS {
            reversed = (reversed << 1) | (source & 1);
            source >>= 1;
            i += 1;
        }
        table[byte] = reversed;
        byte += 1;
    }
    table
}

//-----------------------------------------------------------------------------

/// Returns an integer with the lowest `n` bits set.
///
/// # Examples
///
/// ```
/// use everybit::bits;
///
/// assert_eq!(bits::low_set(13), 0x1FFF);
/// ```
///
/// # Panics
///
/// May panic if `n > 64`.
#[inline]
pub fn low_set(n: usize) -> u64 {
    LOW_SET[n]
}

/// Returns an integer with the highest `n` bits set.
///
/// # Examples
///
/// ```
/// use everybit::bits;
///
/// assert_eq!(bits::high_set(13), 0xFFF8_0000_0000_0000);
/// ```
///
/// # Panics
///
/// May panic if `n > 64`.
#[inline]
pub fn high_set(n: usize) -> u64 {
    HIGH_SET[n]
}

/// Reverses the order of the bits in a byte.
///
/// # Examples
///
/// ```
/// use everybit::bits;
///
/// assert_eq!(bits::reverse_byte(0b0000_0001), 0b1000_0000);
/// assert_eq!(bits::reverse_byte(0b0110_1010), 0b0101_0110);
/// ```
#[inline]
pub fn reverse_byte(byte: u8) -> u8 {
    BIT_REVERSE[byte as usize]
}

/// Reverses the order of the bits in a word.
///
/// Bit `i` of the input becomes bit `63 - i` of the output.
/// Each byte is reversed with a table lookup, and byte `i` of the input becomes byte `7 - i` of the output.
///
/// # Examples
///
/// ```
/// use everybit::bits;
///
/// assert_eq!(bits::reverse_word(1), 0x8000_0000_0000_0000);
/// assert_eq!(bits::reverse_word(0x0000_0000_0000_00F1), 0x8F00_0000_0000_0000);
/// ```
#[inline]
pub fn reverse_word(word: u64) -> u64 {
    let bytes = word.to_le_bytes();
    let mut result = [0u8; 8];
    for (i, byte) in bytes.iter().enumerate() {
        result[7 - i] = reverse_byte(*byte);
    }
    u64::from_le_bytes(result)
}

//-----------------------------------------------------------------------------

/// Returns the number of bits that can be stored in `n` integers of type `u64`.
///
/// Behavior is undefined if `n * 64 > usize::MAX`.
///
/// # Examples
///
/// ```
/// use everybit::bits;
///
/// assert_eq!(bits::words_to_bits(3), 192);
/// ```
#[inline]
pub fn words_to_bits(n: usize) -> usize {
    n * WORD_BITS
}

/// Returns the number of integers of type `u64` required to store `n` bits.
///
/// # Examples
///
/// ```
/// use everybit::bits;
///
/// assert_eq!(bits::bits_to_words(64), 1);
/// assert_eq!(bits::bits_to_words(65), 2);
/// assert_eq!(bits::bits_to_words(usize::MAX), usize::MAX / 64 + 1);
/// ```
#[inline]
pub fn bits_to_words(n: usize) -> usize {
    (n >> INDEX_SHIFT) + ((n & OFFSET_MASK != 0) as usize)
}

/// Returns the number of bytes required to store `n` bits.
///
/// # Examples
///
/// ```
/// use everybit::bits;
///
/// assert_eq!(bits::bits_to_bytes(0), 0);
/// assert_eq!(bits::bits_to_bytes(8), 1);
/// assert_eq!(bits::bits_to_bytes(9), 2);
/// ```
#[inline]
pub fn bits_to_bytes(n: usize) -> usize {
    n / BYTE_BITS + ((n % BYTE_BITS != 0) as usize)
}

/// Splits a bit offset into an index in an array of `u64` and an offset within the integer.
///
/// # Examples
///
/// ```
/// use everybit::bits;
///
/// assert_eq!(bits::split_offset(123), (1, 59));
/// ```
#[inline]
pub fn split_offset(bit_offset: usize) -> (usize, usize) {
    (bit_offset >> INDEX_SHIFT, bit_offset & OFFSET_MASK)
}

//-----------------------------------------------------------------------------

/// Reads the 64 bits starting at `bit_offset` from a bit array implemented as an array of `u64` values.
///
/// The low part of the result comes from the word containing `bit_offset` shifted right, and the high part
/// from the following word shifted left.
/// If `bit_offset` is a multiple of 64, only one word is read.
///
/// # Examples
///
/// ```
/// use everybit::bits;
///
/// let array: Vec<u64> = vec![0xFFFF_0000_0000_0000, 0x1234];
/// assert_eq!(bits::read_word(&array, 0), 0xFFFF_0000_0000_0000);
/// assert_eq!(bits::read_word(&array, 48), 0x1234_FFFF);
/// ```
///
/// # Panics
///
/// Panics if the words covering `bit_offset..bit_offset + 64` are not in the array.
#[inline]
pub fn read_word(array: &[u64], bit_offset: usize) -> u64 {
    let (index, offset) = split_offset(bit_offset);
    if offset == 0 {
        array[index]
    } else {
        (array[index] >> offset) | (array[index + 1] << (WORD_BITS - offset))
    }
}

/// Writes 64 bits starting at `bit_offset` into a bit array implemented as an array of `u64` values.
///
/// The bits outside `bit_offset..bit_offset + 64` in the words touched are preserved.
/// The low word keeps its lowest `bit_offset % 64` bits and the high word keeps its highest `64 - bit_offset % 64` bits.
///
/// # Examples
///
/// ```
/// use everybit::bits;
///
/// let mut array: Vec<u64> = vec![0xFF, !0u64];
/// bits::write_word(&mut array, 8, 0);
/// assert_eq!(array, vec![0xFF, 0xFFFF_FFFF_FFFF_FF00]);
/// ```
///
/// # Panics
///
/// Panics if the words covering `bit_offset..bit_offset + 64` are not in the array.
#[inline]
pub fn write_word(array: &mut [u64], bit_offset: usize, value: u64) {
    let (index, offset) = split_offset(bit_offset);
    if offset == 0 {
        array[index] = value;
    } else {
        array[index] = (array[index] & low_set(offset)) | (value << offset);
        array[index + 1] = (array[index + 1] & high_set(WORD_BITS - offset)) | (value >> (WORD_BITS - offset));
    }
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn low_set_test() {
        assert_eq!(low_set(0), 0u64, "low_set(0) failed");
        assert_eq!(low_set(13), 0x1FFF, "low_set(13) failed");
        assert_eq!(low_set(64), !0u64, "low_set(64) failed");
    }

    #[test]
    fn high_set_test() {
        assert_eq!(high_set(0), 0, "high_set(0) failed");
        assert_eq!(high_set(13), 0xFFF8_0000_0000_0000, "high_set(13) failed");
        assert_eq!(high_set(64), !0u64, "high_set(64) failed");
    }

    #[test]
    fn complementary_masks() {
        for n in 0..=WORD_BITS {
            assert_eq!(low_set(n) ^ high_set(WORD_BITS - n), !0u64, "Masks for {} bits are not complementary", n);
        }
    }

    #[test]
    fn reverse_bytes() {
        for byte in 0..=255u8 {
            assert_eq!(reverse_byte(byte), byte.reverse_bits(), "Invalid reversal of {:08b}", byte);
            assert_eq!(reverse_byte(reverse_byte(byte)), byte, "Reversing {:08b} twice changed it", byte);
        }
    }

    #[test]
    fn reverse_words() {
        for i in 0..WORD_BITS {
            assert_eq!(reverse_word(1u64 << i), 1u64 << (WORD_BITS - 1 - i), "Invalid reversal of bit {}", i);
        }
        assert_eq!(reverse_word(0), 0, "Invalid reversal of 0");
        assert_eq!(reverse_word(!0u64), !0u64, "Invalid reversal of !0");

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let word: u64 = rng.gen();
            assert_eq!(reverse_word(word), word.reverse_bits(), "Invalid reversal of {:016X}", word);
        }
    }

    #[test]
    fn word_counts() {
        assert_eq!(bits_to_words(0), 0, "bits_to_words(0) failed");
        assert_eq!(bits_to_words(1), 1, "bits_to_words(1) failed");
        assert_eq!(bits_to_words(128), 2, "bits_to_words(128) failed");
        assert_eq!(bits_to_words(129), 3, "bits_to_words(129) failed");
        assert_eq!(bits_to_bytes(7), 1, "bits_to_bytes(7) failed");
        assert_eq!(bits_to_bytes(usize::MAX), usize::MAX / 8 + 1, "bits_to_bytes(usize::MAX) failed");
    }

    #[test]
    fn read_write() {
        let mut rng = rand::thread_rng();
        let mut array: Vec<u64> = vec![0; 8];
        for bit_offset in 0..(6 * WORD_BITS) {
            let value: u64 = rng.gen();
            write_word(&mut array, bit_offset, value);
            assert_eq!(read_word(&array, bit_offset), value, "Invalid word at offset {}", bit_offset);
        }
    }

    #[test]
    fn write_preserves_neighbors() {
        for bit_offset in 0..(2 * WORD_BITS) {
            let mut array: Vec<u64> = vec![!0u64; 4];
            write_word(&mut array, bit_offset, 0);
            for i in 0..(4 * WORD_BITS) {
                let (index, offset) = split_offset(i);
                let bit = (array[index] >> offset) & 1 == 1;
                let overwritten = i >= bit_offset && i < bit_offset + WORD_BITS;
                assert_eq!(bit, !overwritten, "Invalid bit {} after writing at offset {}", i, bit_offset);
            }
        }
    }

    #[test]
    fn aligned_read_ignores_next_word() {
        let array: Vec<u64> = vec![0x0123_4567_89AB_CDEF];
        assert_eq!(read_word(&array, 0), 0x0123_4567_89AB_CDEF, "Aligned read of the last word failed");
    }
}

//-----------------------------------------------------------------------------
