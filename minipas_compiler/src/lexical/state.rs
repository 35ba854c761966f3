//! Scanner state machine
//!
//! The whole machine is the single function [`transition`]. It is total over
//! `ScannerState x CharCategory`, so every input has a defined effect and the
//! analyzer only has to carry out the returned [`Transition`].

use super::classifier::CharCategory;
use serde::Serialize;

/// What the scanner has buffered so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ScannerState {
    #[default]
    Initial,
    InWord,
    InNumber,
    AfterEquals,
    AfterMinus,
    AfterStar,
    AfterLeftParen,
    AfterRightParen,
    AfterLess,
    AfterGreater,
    AfterColon,
    AfterSemicolon,
}

impl ScannerState {
    pub const ALL: [ScannerState; 12] = [
        Self::Initial,
        Self::InWord,
        Self::InNumber,
        Self::AfterEquals,
        Self::AfterMinus,
        Self::AfterStar,
        Self::AfterLeftParen,
        Self::AfterRightParen,
        Self::AfterLess,
        Self::AfterGreater,
        Self::AfterColon,
        Self::AfterSemicolon,
    ];

    /// Buffer holds a single punctuation character
    pub fn is_after_punctuation(&self) -> bool {
        !matches!(self, Self::Initial | Self::InWord | Self::InNumber)
    }
}

/// Effect of feeding one character to the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Ignore the character
    Skip,
    /// Emit the buffered lexeme and return to `Initial`
    Flush,
    /// Append the character and move to the given state
    Append(ScannerState),
    /// Emit the buffered lexeme, then start a new one with the character
    FlushAppend(ScannerState),
    /// Report buffer + character as an invalid symbol, then start a new
    /// lexeme with the character
    DiscardAppend(ScannerState),
    /// Append the character and emit the completed lexeme
    AppendFlush,
    /// Emit the buffered lexeme, then an end-of-line marker. The state is
    /// carried over to the next line.
    LineBreak,
    /// Report the character as an invalid symbol; state and buffer are kept
    Reject,
}

fn after(punctuation: CharCategory) -> ScannerState {
    match punctuation {
        CharCategory::Equals => ScannerState::AfterEquals,
        CharCategory::Minus => ScannerState::AfterMinus,
        CharCategory::Star => ScannerState::AfterStar,
        CharCategory::LeftParen => ScannerState::AfterLeftParen,
        CharCategory::RightParen => ScannerState::AfterRightParen,
        CharCategory::Less => ScannerState::AfterLess,
        CharCategory::Greater => ScannerState::AfterGreater,
        CharCategory::Colon => ScannerState::AfterColon,
        CharCategory::Semicolon => ScannerState::AfterSemicolon,
        CharCategory::Letter => ScannerState::InWord,
        CharCategory::Digit => ScannerState::InNumber,
        CharCategory::Whitespace | CharCategory::Newline | CharCategory::Other => {
            ScannerState::Initial
        }
    }
}

pub fn transition(state: ScannerState, input: CharCategory) -> Transition {
    use CharCategory as C;
    use ScannerState as S;

    match (state, input) {
        (S::Initial, C::Whitespace) => Transition::Skip,
        (_, C::Whitespace) => Transition::Flush,

        (S::Initial | S::InWord, C::Letter) => Transition::Append(S::InWord),
        (S::InNumber, C::Letter) => Transition::DiscardAppend(S::InWord),
        (_, C::Letter) => Transition::FlushAppend(S::InWord),

        (S::Initial | S::InNumber, C::Digit) => Transition::Append(S::InNumber),
        (S::InWord, C::Digit) => Transition::Append(S::InWord),
        (_, C::Digit) => Transition::FlushAppend(S::InNumber),

        (S::Initial | S::AfterLess | S::AfterGreater | S::AfterColon, C::Equals) => {
            Transition::AppendFlush
        }
        (S::AfterLess, C::Greater) => Transition::AppendFlush,

        (
            _,
            C::Equals
            | C::Greater
            | C::Minus
            | C::Star
            | C::LeftParen
            | C::RightParen
            | C::Less
            | C::Colon
            | C::Semicolon,
        ) => Transition::FlushAppend(after(input)),

        (_, C::Newline) => Transition::LineBreak,
        (_, C::Other) => Transition::Reject,
    }
}
