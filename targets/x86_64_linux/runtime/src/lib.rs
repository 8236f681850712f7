pub mod strings;

pub use strings::{_string_compare_n, compare_n, compare_n_ordering};
