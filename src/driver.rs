use tracing::debug;

use crate::error::{Error, Result};
use crate::io::{ReadInt, WriteInt};
use crate::qsort::{sort_fixed, CAPACITY};

/// Reads [`CAPACITY`] integers, sorts them in place and writes them back in
/// ascending order. Returns the sorted array.
///
/// Input past the first [`CAPACITY`] values is never read.
pub fn run<I, O>(input: &mut I, output: &mut O) -> Result<[i32; CAPACITY]>
where
    I: ReadInt,
    O: WriteInt,
{
    let mut arr = [0_i32; CAPACITY];
    for (read, slot) in arr.iter_mut().enumerate() {
        *slot = input.read_int()?.ok_or(Error::UnexpectedEof { read })?;
    }
    debug!(values = ?arr, "read input");

    sort_fixed(&mut arr)?;
    debug!(values = ?arr, "sorted");

    for &value in &arr {
        output.write_int(value)?;
    }
    output.flush()?;

    Ok(arr)
}
