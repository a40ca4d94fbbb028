//! Sweep declaration and enumeration
//!
//! This module contains everything needed to turn a set of named axes and
//! exclusion predicates into the ordered sequence of valid configurations:
//! - Axis domains, including the cumulative device-set expansion
//! - Configurations and their axis bindings
//! - Exclusion predicates and the built-in rules
//! - The pruned depth-first enumerator
//! - The LBM benchmark sweep plan

/// Axis declarations and device-set prefix expansion
pub mod axis;
/// Concrete axis-value assignments
pub mod configuration;
/// Pruned depth-first traversal of the cross product
pub mod enumerator;
/// LBM benchmark sweep assembled from settings
pub mod plan;
/// Exclusion predicates and built-in skip rules
pub mod predicate;

pub use axis::{Axis, AxisDomain};
pub use configuration::{Binding, Configuration};
pub use enumerator::{Sweep, SweepIter};
pub use predicate::{ExclusionPredicate, ExclusionRule};
