//! Interactive console: prompts, rendering and the operator session.
//!
//! Everything here is generic over `BufRead`/`Write` so the whole session can
//! be driven from a byte buffer in tests.

pub mod print;
pub mod prompt;
pub mod session;

pub use session::run_session;
