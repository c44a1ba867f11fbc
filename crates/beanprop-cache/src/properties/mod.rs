//! Key property list parsing.

pub mod grammar;

pub use grammar::parse_key_property_list;
