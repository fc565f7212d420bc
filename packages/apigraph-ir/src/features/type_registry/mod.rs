// Type Registry & Factory
//
// Two-phase build of one universe:
// - Phase 1 (registry): intern names and compounds into an arena, one slot
//   per full name; unknown names get facade slots
// - Phase 2 (resolver): bind every raw-name edge to an arena index and
//   freeze the result into a TypeGraph

pub mod domain;
pub mod infrastructure;

pub use domain::{is_primitive, PRIMITIVE_TYPES};
pub use infrastructure::TypeRegistry;
