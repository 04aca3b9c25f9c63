use self::tokens::{TokenIndices, Tokens};

#[allow(missing_docs)]
pub mod tokens;

/// Whitespace tokenization of text.
///
/// Tokens are maximal runs of non-whitespace characters. Only ASCII
/// whitespace separates tokens; punctuation stays attached to its token.
pub trait Tokenize {
    /// The tokens, in order.
    fn tokens(&self) -> Tokens<'_>;
    /// The tokens with their byte offsets.
    fn token_indices(&self) -> TokenIndices<'_>;
}

impl Tokenize for str {
    fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }

    fn token_indices(&self) -> TokenIndices<'_> {
        TokenIndices::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        assert_eq!(
            "  the  quick brown ".tokens().collect::<Vec<_>>(),
            vec!["the", "quick", "brown"]
        );
        assert_eq!("".tokens().count(), 0);
        assert_eq!(" \t\n ".tokens().count(), 0);
    }

    #[test]
    fn keeps_punctuation_and_case() {
        let msg = "This was quoted,\t\"an emoji\" (😄)\r\nand\u{a0}more.";
        assert_eq!(
            msg.tokens().collect::<Vec<_>>(),
            vec!["This", "was", "quoted,", "\"an", "emoji\"", "(😄)", "and\u{a0}more."]
        );
    }

    #[test]
    fn indices() {
        let msg = " ab  c\td ";
        assert_eq!(
            msg.token_indices().collect::<Vec<_>>(),
            vec![(1, "ab"), (5, "c"), (7, "d")]
        );
    }
}
