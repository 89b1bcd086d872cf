pub mod driver;
pub mod error;
pub mod io;
pub mod num_parse;
pub mod qsort;

pub use error::{Error, Result};
pub use qsort::CAPACITY;
