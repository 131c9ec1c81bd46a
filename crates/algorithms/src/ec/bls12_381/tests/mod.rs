//! BLS12-381 test suite
//!
//! Tests are organized into focused modules for better maintainability.


#[cfg(test)]
mod groups;
