//! Vis viva lunar lander: a turn-based descent simulation.
//!
//! The physics lives in the member crates; this facade re-exports them so the binary and
//! integration tests can reach everything through one path.

pub use lander_config as config;
pub use lander_console as console;
pub use lander_core as physics;
pub use lander_propulsion as propulsion;
pub use lander_sim as sim;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
