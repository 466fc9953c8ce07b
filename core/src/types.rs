//! Shared primitive types used across the client bindings.

/// A player's on-chain address, hex-encoded. Empty until data arrives.
pub type PlayerId = String;

/// A grid coordinate component. Signed so that any integer the world
/// reports decodes; values off the grid are simply not drawn.
pub type Coord = i64;

/// Seconds since the unix epoch, as reported by the world contract.
pub type Timestamp = u64;

/// The world namespace every model id is prefixed with.
pub const DEFAULT_NAMESPACE: &str = "dojo_starter";
