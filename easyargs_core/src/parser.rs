use std::env;

use crate::error::ArgError;
use crate::model::Setting;
use crate::store::SettingsStore;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

mod token;

use token::split_token;

impl SettingsStore {
    /// Parse the input tokens into a new store.
    ///
    /// ### Example
    /// ```
    /// # use easyargs_core as easyargs;
    /// use easyargs::SettingsStore;
    ///
    /// let store = SettingsStore::parse_settings(&["a=1", "-b", "c:2", "/d="]).unwrap();
    /// assert_eq!(store.value_of("a", None).unwrap(), Some("1"));
    /// assert_eq!(store.value_of("b", None).unwrap(), None);
    /// assert_eq!(store.value_of("c", None).unwrap(), Some("2"));
    /// assert_eq!(store.value_of("d", None).unwrap(), Some(""));
    /// ```
    pub fn parse_settings(tokens: &[&str]) -> Result<Self, ArgError> {
        let mut store = Self::new();
        store.parse_args(tokens)?;
        Ok(store)
    }

    /// Parse the process' command line (excluding the program name) into a new store.
    ///
    /// See [`SettingsStore::parse_args`] for the token syntax.
    pub fn parse_env() -> Result<Self, ArgError> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        Self::parse_settings(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Replace the contents of this store with the settings parsed from the input tokens.
    ///
    /// Each token becomes one setting:
    /// * `key=value` or `key:value`: split on the first separator (of either kind).
    /// The key is right-trimmed and the value is trimmed.
    /// A trailing separator (ex: `key=`) yields an empty value.
    /// * `key`: a bare flag, without a value.
    /// * A key starting with `-` or `/` has exactly that one character stripped (ex: `--key` becomes `-key`).
    ///
    /// Later tokens overwrite earlier tokens with the same (case-insensitive) key.
    ///
    /// Fails with:
    /// * [`ArgError::InvalidKey`] when a token starts with a separator (ex: `=value`).
    /// * [`ArgError::InvalidArgument`] when a key is only a prefix (ex: `-`).
    /// * [`ArgError::InvalidSetting`] when a key is otherwise empty (ex: `" "`).
    ///
    /// The store is cleared before parsing, and is left empty when parsing fails.
    ///
    /// ### Example
    /// ```
    /// # use easyargs_core as easyargs;
    /// use easyargs::{ArgError, SettingsStore};
    ///
    /// let mut store = SettingsStore::parse_settings(&["old"]).unwrap();
    /// store.parse_args(&["new=1"]).unwrap();
    /// assert!(!store.exists("old").unwrap());
    ///
    /// let error = store.parse_args(&["ok", "-"]).unwrap_err();
    /// assert_eq!(error, ArgError::InvalidArgument("-".to_string()));
    /// assert!(store.is_empty());
    /// ```
    pub fn parse_args(&mut self, tokens: &[&str]) -> Result<(), ArgError> {
        self.clear();
        let mut staged = Self::new();

        for token in tokens {
            let setting = match split_token(token)? {
                (key, Some(value)) => Setting::from_pair(&[key, value])?,
                (key, None) => Setting::from_pair(&[key])?,
            };

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Parsed '{token}' as setting '{setting}'.");
            }

            staged.set(setting);
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Parsed {} tokens into {} settings.",
                tokens.len(),
                staged.len()
            );
        }

        *self = staged;
        Ok(())
    }
}
