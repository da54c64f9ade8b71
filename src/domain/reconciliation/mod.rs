//! Asset-set reconciliation across exchanges and market types.

pub mod asset_set;
pub mod comparison;
pub mod reconciler;

pub use asset_set::{AssetSet, ResultSet};
pub use comparison::CrossComparison;
pub use reconciler::{Reconciler, Region, present_in_absent_from, select_pairs, symmetric_exclusive};
