//! Domain types shared across beanprop crates.

pub mod attribute;
pub mod collections;
pub mod key_property_list;
pub mod object_name;

pub use attribute::AttributeDescriptor;
pub use collections::{FxHashMap, FxHashSet, NameSet};
pub use key_property_list::KeyPropertyList;
pub use object_name::ObjectName;
