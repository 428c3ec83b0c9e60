use crate::error::ArgError;
use crate::prelude::Keys;
use crate::store::SettingsStore;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

fn fail(message: &str) -> ArgError {
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Assertion failed: {message}");
    }

    ArgError::AssertionFailed(message.to_string())
}

/// Presence assertions.
///
/// Each assertion fails with [`ArgError::AssertionFailed`] carrying `message` verbatim, or with [`ArgError::InvalidKey`] if an empty key is reached.
/// Keys are checked in order, and checking stops as soon as the outcome is decided.
///
/// ### Example
/// ```
/// # use easyargs_core as easyargs;
/// use easyargs::{ArgError, SettingsStore};
///
/// let store = SettingsStore::parse_settings(&["-in=a.txt", "-quiet"]).unwrap();
/// store.assert("in", "missing -in").unwrap();
/// store.assert_or(["quiet", "verbose"], "one of -quiet/-verbose").unwrap();
/// store.assert_xor(["quiet", "verbose"], "only one of -quiet/-verbose").unwrap();
///
/// let error = store.assert_and(["in", "out"], "both -in and -out are required").unwrap_err();
/// assert_eq!(error, ArgError::AssertionFailed("both -in and -out are required".to_string()));
/// ```
impl SettingsStore {
    /// Assert that `key` is present.
    pub fn assert(&self, key: &str, message: &str) -> Result<(), ArgError> {
        if self.exists(key)? {
            Ok(())
        } else {
            Err(fail(message))
        }
    }

    /// Assert that every one of the `keys` is present.
    ///
    /// Stops at the first missing key.
    /// An empty set of keys always passes.
    pub fn assert_and(&self, keys: impl Keys, message: &str) -> Result<(), ArgError> {
        for key in keys.key_list() {
            self.assert(key, message)?;
        }

        Ok(())
    }

    /// Assert that at least one of the `keys` is present.
    ///
    /// An empty set of keys always fails.
    pub fn assert_or(&self, keys: impl Keys, message: &str) -> Result<(), ArgError> {
        if self.exists(keys)? {
            Ok(())
        } else {
            Err(fail(message))
        }
    }

    /// Assert that precisely one of the `keys` is present.
    ///
    /// Stops as soon as a second present key is found.
    /// An empty set of keys always fails.
    pub fn assert_xor(&self, keys: impl Keys, message: &str) -> Result<(), ArgError> {
        let mut found = false;

        for key in keys.key_list() {
            if self.exists(key)? {
                if found {
                    return Err(fail(message));
                }

                found = true;
            }
        }

        if found {
            Ok(())
        } else {
            Err(fail(message))
        }
    }
}
