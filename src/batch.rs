//! Batch Mode - replaying pre-tokenized button labels
//!
//! Non-interactive input arrives as whitespace-delimited tokens, from
//! the command line or a file. Replay is strictly sequential: each token
//! is fully dispatched before the next one starts. A token that looks
//! like a complete numeric literal gets a synthetic `ENTER` in front of
//! it, which is what lets `"5 3 +"` commit 5 to the stack before 3
//! starts typing. The lone operators `"+"` and `"-"` always mean the
//! operator, never a signed number.

use crate::engine::Engine;

/// Characters a bare numeric literal may consist of. Deliberately loose:
/// the test is a character-set scan, not a parse, so `"e"` or `"1.2.3"`
/// also auto-enter and then read through the lenient parser.
const NUMERIC_CHARS: &str = "0123456789e+-.";

/// Split input into button-label tokens on any whitespace.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_owned).collect()
}

/// Whether a token reads as a complete numeric literal.
pub fn looks_numeric(token: &str) -> bool {
    token != "+"
        && token != "-"
        && !token.is_empty()
        && token.chars().all(|ch| NUMERIC_CHARS.contains(ch))
}

/// Replay tokens against the engine, one label at a time.
pub fn replay(engine: &mut Engine, tokens: &[String]) {
    for token in tokens {
        if looks_numeric(token) {
            engine.process("ENTER");
        }
        engine.process(token);
    }
}

// =============================================================================
// TESTS
// =============================================================================
