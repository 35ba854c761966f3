//! Token system shared by the scanner and the syntax analyzer
//!
//! - [`TokenCategory`]: the 25 two-digit category codes
//! - [`Token`]: an immutable (lexeme, category) pair
//! - [`TokenStream`]: the complete sequence produced by one scan
//! - [`handoff`]: the persisted `.dyd` form of a stream

pub mod category;
pub mod handoff;
pub mod token;
pub mod token_stream;

pub use category::TokenCategory;
pub use handoff::HandoffError;
pub use token::Token;
pub use token_stream::TokenStream;
