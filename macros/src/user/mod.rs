//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(SocketInterfaces)]` | on struct/enum | Declare interfaces intrusively |
//! | `#[socket_bound]` | on fn/impl | Interface-gated items |

mod derive;
mod socket_bound;

pub use derive::expand_derive_socket_interfaces;
pub use socket_bound::{expand_socket_bound, BoundArgs};
