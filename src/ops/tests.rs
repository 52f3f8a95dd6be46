use super::*;

use crate::bit_array::BitArray;
use crate::internal;

//-----------------------------------------------------------------------------

// A naive bit array for testing the default implementations in traits.
#[derive(Clone, Debug, PartialEq, Eq)]
struct NaiveArray(Vec<bool>);

impl From<&BitArray> for NaiveArray {
    fn from(source: &BitArray) -> Self {
        NaiveArray(internal::to_bools(source))
    }
}

impl BitAccess for NaiveArray {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn bit(&self, index: usize) -> bool {
        self.0[index]
    }

    fn set_bit(&mut self, index: usize, value: bool) {
        self.0[index] = value;
    }
}

impl Reverse for NaiveArray {}

impl Rotate for NaiveArray {}

//-----------------------------------------------------------------------------

#[test]
fn modulo_values() {
    assert_eq!(modulo(0, 1), 0, "modulo(0, 1) failed");
    assert_eq!(modulo(5, 5), 0, "modulo(5, 5) failed");
    assert_eq!(modulo(6, 5), 1, "modulo(6, 5) failed");
    assert_eq!(modulo(-1, 5), 4, "modulo(-1, 5) failed");
    assert_eq!(modulo(-6, 5), 4, "modulo(-6, 5) failed");
    assert_eq!(modulo(isize::MIN as i128, 3), 1, "modulo(isize::MIN, 3) failed");
    assert_eq!(modulo(-(isize::MIN as i128), 3), 2, "modulo(-isize::MIN, 3) failed");
    assert_eq!(modulo(i128::MAX, usize::MAX), (i128::MAX % (usize::MAX as i128)) as usize, "modulo(i128::MAX, usize::MAX) failed");
}

#[test]
#[should_panic]
fn modulo_by_zero() {
    let _ = modulo(3, 0);
}

#[test]
fn valid_ranges() {
    check_range(10, 0, 10);
    check_range(10, 10, 0);
    check_range(10, 3, 4);
    check_range(0, 0, 0);
}

#[test]
#[should_panic]
fn invalid_range() {
    check_range(10, 3, 8);
}

#[test]
#[should_panic]
fn overflowing_range() {
    check_range(10, usize::MAX, 1);
}

//-----------------------------------------------------------------------------

#[test]
fn default_reverse() {
    let mut naive = NaiveArray(vec![true, true, false, false, true]);
    naive.reverse(0, 4);
    assert_eq!(naive.0, vec![false, false, true, true, true], "Invalid reversal");
    naive.reverse(2, 3);
    assert_eq!(naive.0, vec![false, false, true, true, true], "Reversing a constant range changed it");
    naive.reverse(1, 0);
    assert!(!naive.is_empty(), "Non-empty array reported as empty");
}

#[test]
fn default_rotate() {
    let mut naive = NaiveArray(vec![true, false, false, false, false, true]);
    naive.rotate_left(0, 6, 1);
    assert_eq!(naive.0, vec![false, false, false, false, true, true], "Invalid rotation to the left");
    naive.rotate(0, 6, 2);
    assert_eq!(naive.0, vec![true, true, false, false, false, false], "Invalid rotation to the right");
    naive.rotate(1, 4, -9);
    assert_eq!(naive.0, vec![true, false, false, false, true, false], "Invalid rotation with a large negative amount");
    naive.rotate(3, 0, 5);
    assert_eq!(naive.0, vec![true, false, false, false, true, false], "Rotating an empty range changed the array");
}

#[test]
fn bit_array_matches_defaults() {
    let array = internal::random_array(1200, 42);
    let ranges = [(0, 1200), (1, 1199), (64, 300), (100, 255), (100, 256), (513, 600)];
    for (offset, len) in ranges.iter() {
        let mut fast = array.clone();
        let mut naive = NaiveArray::from(&array);
        fast.reverse(*offset, *len);
        naive.reverse(*offset, *len);
        assert_eq!(NaiveArray::from(&fast), naive, "Reversal differs for offset {}, len {}", offset, len);

        for amount in [-1000isize, -65, -1, 0, 1, 63, 128, 999].iter() {
            fast.rotate(*offset, *len, *amount);
            naive.rotate(*offset, *len, *amount);
            assert_eq!(NaiveArray::from(&fast), naive,
                "Rotation differs for offset {}, len {}, amount {}", offset, len, amount);
        }
    }
}

//-----------------------------------------------------------------------------
