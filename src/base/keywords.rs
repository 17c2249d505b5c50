//! Reserved words of the target language.
//!
//! Any [`Name`](super::Name) matching one of these is rendered in backticks.

/// Alphanumeric keywords.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "case", "catch", "class", "def", "do", "else", "extends", "false", "final",
    "finally", "for", "forSome", "if", "implicit", "import", "lazy", "macro", "match", "new",
    "null", "object", "override", "package", "private", "protected", "return", "sealed", "super",
    "this", "throw", "trait", "try", "true", "type", "val", "var", "while", "with", "yield",
];

/// Reserved symbolic tokens.
pub const RESERVED_SYMBOLS: &[&str] = &["_", ":", "=", "=>", "<-", "<:", "<%", ">:", "#", "@"];

pub fn is_reserved_word(ident: &str) -> bool {
    RESERVED_KEYWORDS.contains(&ident) || RESERVED_SYMBOLS.contains(&ident)
}
