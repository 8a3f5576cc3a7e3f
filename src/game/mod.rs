//! The game itself: state, turn engine, guessers and the clue log.
//!
//! The engine owns one `GameState` per game and talks to the outside world
//! only through a `GuessReader` and a `ClueLog`, both passed in by the caller.

pub mod engine;
pub mod log;
pub mod reader;
pub mod state;

pub use engine::{Game, GameSummary, Phase};
pub use log::ClueLog;
pub use reader::{GuessReader, ScriptedReader, TerminalReader, DEBUG_FLAG, SKIP_FLAG};
pub use state::{GameState, RoundRecord, HIDDEN};
