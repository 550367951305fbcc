//! Shared command handler building blocks

mod list;

pub use list::{print_list, print_list_with_count};
