//! Fast hash collections used for name populations.

pub use rustc_hash::{FxHashMap, FxHashSet};

use super::ObjectName;

/// The full set of names observed in one poll cycle.
pub type NameSet = FxHashSet<ObjectName>;
