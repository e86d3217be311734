pub mod catalog;
pub mod cli;
pub mod error;
pub mod output;
pub mod scanner;
pub mod summary;

pub use error::{PortInventoryError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
