/// Recursive quicksort with the Lomuto partition scheme, pivoting on the
/// leftmost element of each range.
pub mod lomuto;

pub use lomuto::{partition, qsort, quicksort};

use crate::error::{Error, Result};

/// Number of values the driver reads, sorts and writes back.
pub const CAPACITY: usize = 10;

/// Sorts an array of exactly [`CAPACITY`] values.
///
/// Any other length is rejected before the slice is touched.
pub fn sort_fixed(v: &mut [i32]) -> Result<()> {
    if v.len() != CAPACITY {
        return Err(Error::InvalidInput {
            expected: CAPACITY,
            actual: v.len(),
        });
    }
    quicksort(v, 0, CAPACITY - 1)
}
