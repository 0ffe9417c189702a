//! Tic-tac-toe engine - game state, rules and a minimax opponent.
//!
//! The engine is presentation-agnostic: a front end feeds it player moves
//! and renders the board, outcome and computer replies it hands back.
//!
//! # Architecture
//!
//! - **Board**: 3x3 squares, win and draw detection
//! - **GameEngine**: symbol choice, turn order, scores, computer replies
//! - **Minimax**: exhaustive search that picks the computer's move
//! - **SessionManager**: one locked engine per session for concurrent hosts
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! engine.set_computer_mode(true);
//! engine.choose_symbol(Mark::X).unwrap();
//!
//! let report = engine.apply_move(4).unwrap();
//! assert!(report.computer_move().is_some());
//! assert_ne!(report.outcome(), Some(Outcome::Win(Mark::O)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Session management
pub use session::{SessionError, SessionId, SessionManager};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, BalancedMarksInvariant, Board, BoardError, Contract,
    EngineInvariants, GameEngine, Invariant, InvariantSet, InvariantViolation, Mark,
    MonotonicBoardInvariant, Move, MoveContract, MoveError, MoveReport, Outcome, Phase, Position,
    RoundInProgress, Scores, Square, SquareIsEmpty, SymbolError, UnknownMark,
};

/// Move selection and board rules as free functions.
pub use games::tictactoe::{minimax, rules};
