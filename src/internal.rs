// Utility functions for tests and benchmarks.

use crate::bit_array::BitArray;
use crate::ops::BitAccess;

use rand::SeedableRng;
use rand::rngs::StdRng;

//-----------------------------------------------------------------------------

// Returns a random bit array of length `len` determined by `seed`.
pub fn random_array(len: usize, seed: u64) -> BitArray {
    let mut result = BitArray::new(len).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    result.randomize(&mut rng);
    assert_eq!(result.len(), len, "Invalid length for a random BitArray");
    result
}

// Returns the bits of the array as a `bool` vector.
pub fn to_bools(array: &BitArray) -> Vec<bool> {
    array.iter().collect()
}

// Check that the arrays are equal and report the first difference if they are not.
pub fn check_same(array: &BitArray, truth: &BitArray, context: &str) {
    assert_eq!(array.len(), truth.len(), "Invalid array length ({})", context);
    if let Some(index) = array.first_difference(truth) {
        panic!("Arrays differ at bit {} ({}): got {}, expected {}",
            index, context, array.bit(index) as u8, truth.bit(index) as u8);
    }
}

//-----------------------------------------------------------------------------
