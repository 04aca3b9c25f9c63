//! A token together with its spelling verdict.
use serde::Serialize;
use std::fmt;

use crate::constants::{UNKNOWN_CLOSE, UNKNOWN_OPEN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
/// A token and whether the dictionary knows it
pub struct ClassifiedToken<'a> {
    /// the token exactly as it appeared in the text
    pub token: &'a str,
    /// byte offset of the token in the text
    pub offset: usize,
    /// whether the token is in the dictionary
    pub known: bool,
}

impl<'a> ClassifiedToken<'a> {
    /// classifies a token found at `offset`
    pub fn new(token: &'a str, offset: usize, known: bool) -> ClassifiedToken<'a> {
        ClassifiedToken {
            token,
            offset,
            known,
        }
    }

    /// gets the token text
    pub fn token(&self) -> &'a str {
        self.token
    }

    /// returns whether the token is spelled correctly
    pub fn is_known(&self) -> bool {
        self.known
    }
}

/// Known tokens display bare, unknown tokens inside braces.
impl fmt::Display for ClassifiedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.known {
            f.write_str(self.token)
        } else {
            write!(f, "{}{}{}", UNKNOWN_OPEN, self.token, UNKNOWN_CLOSE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ClassifiedToken::new("fox", 0, true).to_string(), "fox");
        assert_eq!(ClassifiedToken::new("quikc", 4, false).to_string(), "{quikc}");
    }

    #[test]
    fn serialize() {
        let json = serde_json::to_string(&ClassifiedToken::new("quikc", 4, false)).unwrap();
        assert_eq!(json, r#"{"token":"quikc","offset":4,"known":false}"#);
    }
}
