//! # Layer 2: Interface Sets
//!
//! A capability set is a fixed nine-slot record of type-level booleans, one
//! slot per tag in the vocabulary.
//!
//! - **Node**: `InterfaceSet` (storage), `Slots` (named slot access).
//! - **Operations**: `SetUnion`, `SetIntersect`, `SupersetOf`, `Closed`.
//! - **Builders**: `interfaces![...]`, `Empty`.

pub mod node;
pub mod ops;
pub mod inspect;
pub mod aliases;

pub use node::{InterfaceSet, Slots, Empty};
pub use ops::{SetUnion, SetIntersect, SupersetOf, Closed, AllSlots};
pub use inspect::Inspect;
