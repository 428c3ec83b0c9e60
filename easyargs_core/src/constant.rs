//! The fixed token syntax recognized by the parser.

/// Characters which split a token into its key and value portions.
/// Only the first occurrence (of either) in a token is used.
pub const SEPARATORS: [char; 2] = ['=', ':'];

/// Characters which mark a flag-style key.
/// Exactly one is stripped from the front of a key.
pub const PREFIXES: [char; 2] = ['-', '/'];
