pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";
pub const UNKNOWN_OPEN: char = '{';
pub const UNKNOWN_CLOSE: char = '}';
pub const TOKEN_SEPARATOR: &str = " ";
