//! Console collaborator for the lander engine: categorised output, operator input and the
//! driving loop that ties them to a [`lander_sim::SimulationEngine`].

pub mod format;
pub mod input;
pub mod output;
pub mod session;

pub use format::format_e10;
pub use input::{BurnSource, ScriptedBurns, StdinBurns};
pub use output::{Console, LineKind, TerminalConsole};
pub use session::{Session, SessionError};
