//! Lexer module.
//!
//! - `core` - the `Lexer` struct, token dispatch and diagnostics
//! - `number` - munching and classifying numeric tokens
//! - `options` - `LexOptions`

mod core;
mod number;
mod options;

pub use self::core::Lexer;
pub use self::options::LexOptions;
