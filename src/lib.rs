//! `easyargs` turns a command line into a queryable set of key/value settings.
//!
//! Unlike a schema-driven parser, `easyargs` does not need to be told about parameters up front.
//! Every token becomes a [`Setting`], and the program then asks the [`SettingsStore`] what it was given.
//! This suits small tools and test harnesses which accept free-form `key=value` style input.
//! `easyargs` prioritizes the following:
//! * *Forgiving syntax*:
//! `key=value`, `key:value`, `-key`, `/key=value` and bare `key` tokens are all accepted, and may be freely mixed.
//! * *Case-insensitive keys*:
//! `-Out=a.txt` is found via `out`, `OUT` or `Out`.
//! * *Strings only*:
//! Values are always strings; converting them (ex: via [`std::str::FromStr`]) is left to the caller.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/settings_demo.rs")]
//! ```
//!
//! ```console
//! $ settings_demo -b /f=out.txt Level:3
//! b: <flag>
//! f: out.txt
//! level: 3
//! fallback: missing
//!
//! $ settings_demo -x
//! Assertion failed: something's missing
//! ```
//!
//! # Token Syntax
//! Each token is parsed independently, in a single pass.
//!
//! * The first separator (either `=` or `:`) splits the token into a key and a value.
//! Only the first separator is used; `a=b:c` stores the key `a` with the value `b:c`.
//! * The key is right-trimmed and the value is trimmed.
//! When the separator is the final character (ex: `key=`), the value is the empty string.
//! * A token without a separator is a bare flag: it stores the key without a value.
//! * A key starting with `-` or `/` has precisely that one character stripped.
//! For example, `--key` stores the key `-key`.
//! * Keys are identified case-insensitively (and trimmed).
//! When the same key appears more than once, the last token wins.
//!
//! Token | Key | Value
//! ------|-----|------
//! `a=1` | `a` | `Some("1")`
//! `c:2` | `c` | `Some("2")`
//! `-b` | `b` | `None`
//! `/d=` | `d` | `Some("")`
//! `x = y ` | `x` | `Some("y")`
//!
//! The following tokens are rejected:
//! * `=value` (a separator before any key): [`ArgError::InvalidKey`].
//! * `-` or `/` (a prefix without a key): [`ArgError::InvalidArgument`].
//! * `" "` (an otherwise empty key): [`ArgError::InvalidSetting`].
//!
//! # Queries & Assertions
//! Queries take any [`Keys`](prelude::Keys): a single key, or an ordered sequence of alternative keys.
//! When given a sequence, the first present key wins.
//!
//! ```
//! use easyargs::SettingsStore;
//!
//! let store = SettingsStore::parse_settings(&["-o=a.txt", "-v"]).unwrap();
//!
//! assert!(store.exists(["verbose", "v"]).unwrap());
//! assert_eq!(store.value_of(["output", "o"], None).unwrap(), Some("a.txt"));
//! assert_eq!(store.value_of("level", Some("1")).unwrap(), Some("1"));
//!
//! store.assert_xor(["o", "stdout"], "specify one of -o or -stdout").unwrap();
//! ```
//!
//! The assertions check key presence, failing with [`ArgError::AssertionFailed`] which carries the supplied message verbatim:
//! * `assert`: the key is present.
//! * `assert_and`: every key is present.
//! * `assert_or`: at least one key is present.
//! * `assert_xor`: precisely one key is present.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while parsing and asserting.
pub use easyargs_core::*;
