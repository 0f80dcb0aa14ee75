//! Square roots on binary64 by Heron's method, using only the four basic
//! arithmetic operations and comparisons. The `core` module holds the
//! iteration kernel; `cli` holds the demonstration and sweep drivers.

pub mod cli;
pub mod core;
