/*! Word-level spell checking against a plain word list.

A [`Dictionary`](dictionary::Dictionary) is built once from a word list
(one word per line, such as `/usr/share/dict/words`), then text is split on
whitespace and every token is classified as known or unknown.

# Usage examples

```
use wordcheck::config::Collation;
use wordcheck::dictionary::Dictionary;
use wordcheck::speller::{render, SpellChecker};

let dictionary = Dictionary::build(["the", "quick", "brown", "fox"], Collation::Bytewise);
let speller = SpellChecker::new(&dictionary);

assert_eq!(render(speller.check("the quikc brown fox")), "the {quikc} brown fox\n");
assert_eq!(wordcheck::distance::distance("kitten", "sitting"), 3);
```

The `wordcheck` binary in the `wordcheck-bin` crate of the same repository
wraps this library in a command line tool.
*/

#![warn(missing_docs)]
pub mod config;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod paths;
pub mod speller;
pub mod subject;
pub mod tokenizer;
pub mod vfs;

pub(crate) mod constants;

pub use error::SpellcheckError;
