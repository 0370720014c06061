//! Module for additional computational capabilities
pub mod filter_data;
pub mod grid;
pub mod math_utils;
pub mod test_helper;
pub use math_utils::{f64_to_isize, usize_to_f64};
