//! Classifying the tokens of a text against a [`Dictionary`].
use itertools::Itertools;

use crate::constants::TOKEN_SEPARATOR;
use crate::dictionary::Dictionary;
use crate::tokenizer::tokens::TokenIndices;
use crate::tokenizer::Tokenize;

pub use self::classified::ClassifiedToken;

pub mod classified;

/// Checks text against a built dictionary.
#[derive(Debug, Clone, Copy)]
pub struct SpellChecker<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> SpellChecker<'d> {
    /// Creates a checker reading from `dictionary`.
    pub fn new(dictionary: &'d Dictionary) -> SpellChecker<'d> {
        SpellChecker { dictionary }
    }

    /// The dictionary being consulted.
    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Whether a single word is spelled correctly.
    #[inline]
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Classifies every whitespace-delimited token of `text`, in order.
    ///
    /// Repeated tokens are classified each time they occur.
    pub fn check<'t>(&self, text: &'t str) -> Classified<'d, 't> {
        Classified {
            dictionary: self.dictionary,
            tokens: text.token_indices(),
        }
    }
}

/// Lazy iterator returned by [`SpellChecker::check`].
#[derive(Debug, Clone)]
pub struct Classified<'d, 't> {
    dictionary: &'d Dictionary,
    tokens: TokenIndices<'t>,
}

impl<'d, 't> Iterator for Classified<'d, 't> {
    type Item = ClassifiedToken<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, token) = self.tokens.next()?;
        let known = self.dictionary.contains(token);
        log::trace!("{:>4}: {:?} known={}", offset, token, known);

        Some(ClassifiedToken::new(token, offset, known))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl std::iter::FusedIterator for Classified<'_, '_> {}

/// Renders classified tokens as `known {unknown} known` plus a trailing newline.
pub fn render<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = ClassifiedToken<'a>>,
{
    let mut out = tokens.into_iter().join(TOKEN_SEPARATOR);
    out.push('\n');
    out
}
