use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::ArgError;
use crate::model::Setting;
use crate::prelude::Keys;

/// Produce the lookup identity of a key: trimmed, then lower-cased.
///
/// Fails with [`ArgError::InvalidKey`] when the key is empty after trimming.
///
/// ### Example
/// ```
/// # use easyargs_core as easyargs;
/// use easyargs::{normalize, ArgError};
///
/// assert_eq!(normalize(" Verbose").unwrap(), "verbose");
/// assert_eq!(normalize(""), Err(ArgError::InvalidKey("".to_string())));
/// ```
pub fn normalize(key: &str) -> Result<String, ArgError> {
    if key.trim().is_empty() {
        return Err(ArgError::InvalidKey(key.to_string()));
    }

    Ok(fold(key))
}

// Callers must have already rejected empty keys.
fn fold(key: &str) -> String {
    key.trim().to_lowercase()
}

/// The collection of parsed settings, keyed case-insensitively.
///
/// Keys are unique; the last write wins.
/// Every query that takes a key accepts any [`Keys`]: a single key, or an ordered sequence of keys.
///
/// ### Example
/// ```
/// # use easyargs_core as easyargs;
/// use easyargs::SettingsStore;
///
/// let mut store = SettingsStore::new();
/// store.set_value("Out", "a.txt").unwrap();
/// store.set_flag("verbose").unwrap();
///
/// assert!(store.exists("OUT").unwrap());
/// assert_eq!(store.value_of(["output", "out"], None).unwrap(), Some("a.txt"));
/// assert_eq!(store.value_of("missing", Some("default")).unwrap(), Some("default"));
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsStore {
    store: HashMap<String, Setting>,
}

impl SettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`SettingsStore`] fixture from `(key, value)` pairs, for use in testing.
    ///
    /// ### Example
    /// ```
    /// # use easyargs_core as easyargs;
    /// use easyargs::SettingsStore;
    ///
    /// let store = SettingsStore::test_from_pairs(&[("in", Some("x")), ("verbose", None)]).unwrap();
    /// assert_eq!(store.value_of("in", None).unwrap(), Some("x"));
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_from_pairs(pairs: &[(&str, Option<&str>)]) -> Result<Self, ArgError> {
        let mut store = Self::new();

        for (key, value) in pairs {
            match value {
                Some(value) => store.set_value(key, *value)?,
                None => store.set_flag(key)?,
            };
        }

        Ok(store)
    }

    /// The number of stored settings.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the store holds no settings.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Remove all settings.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Iterate the `(normalized key, setting)` entries, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Setting)> {
        self.store.iter().map(|(key, setting)| (key.as_str(), setting))
    }

    /// Iterate the normalized keys, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.store.keys().map(String::as_str)
    }

    /// Whether any of the `keys` is present.
    ///
    /// Keys are checked in order, stopping at the first present key.
    /// Fails with [`ArgError::InvalidKey`] if an empty key is reached.
    pub fn exists(&self, keys: impl Keys) -> Result<bool, ArgError> {
        Ok(self.get(keys)?.is_some())
    }

    /// Get the setting for the first of the `keys` (in the order supplied) which is present.
    ///
    /// Keys are checked in order, stopping at the first present key.
    /// Fails with [`ArgError::InvalidKey`] if an empty key is reached.
    ///
    /// ### Example
    /// ```
    /// # use easyargs_core as easyargs;
    /// use easyargs::SettingsStore;
    ///
    /// let store = SettingsStore::parse_settings(&["-o=first", "/output=second"]).unwrap();
    /// assert_eq!(store.get(["output", "o"]).unwrap().unwrap().value(), Some("second"));
    /// assert_eq!(store.get(["o", "output"]).unwrap().unwrap().value(), Some("first"));
    /// assert_eq!(store.get(["x", "y"]).unwrap(), None);
    /// ```
    pub fn get(&self, keys: impl Keys) -> Result<Option<&Setting>, ArgError> {
        for key in keys.key_list() {
            if let Some(setting) = self.store.get(&normalize(key)?) {
                return Ok(Some(setting));
            }
        }

        Ok(None)
    }

    /// Get the value of the first of the `keys` which is present, or `default` when none are.
    ///
    /// The default only stands in for a missing setting: a present bare flag yields `None`.
    /// Keys are checked in order, stopping at the first present key.
    /// Fails with [`ArgError::InvalidKey`] if an empty key is reached.
    pub fn value_of<'a>(
        &'a self,
        keys: impl Keys,
        default: Option<&'a str>,
    ) -> Result<Option<&'a str>, ArgError> {
        Ok(match self.get(keys)? {
            Some(setting) => setting.value(),
            None => default,
        })
    }

    /// Get the setting for `key`, first storing a new setting with the `default` value if it is absent.
    ///
    /// Fails with [`ArgError::InvalidKey`] if the key is empty.
    ///
    /// ### Example
    /// ```
    /// # use easyargs_core as easyargs;
    /// use easyargs::SettingsStore;
    ///
    /// let mut store = SettingsStore::parse_settings(&["level=3"]).unwrap();
    /// assert_eq!(store.get_or_set("level", "1").unwrap().value(), Some("3"));
    /// assert_eq!(store.get_or_set("mode", "fast").unwrap().value(), Some("fast"));
    /// assert!(store.exists("mode").unwrap());
    /// ```
    pub fn get_or_set(
        &mut self,
        key: &str,
        default: impl Into<String>,
    ) -> Result<&Setting, ArgError> {
        match self.store.entry(normalize(key)?) {
            Entry::Occupied(occupied) => Ok(occupied.into_mut()),
            Entry::Vacant(vacant) => Ok(vacant.insert(Setting::new(key, default)?)),
        }
    }

    /// Store the setting, overwriting any setting with the same (normalized) key.
    /// Returns the stored setting.
    pub fn set(&mut self, setting: Setting) -> &Setting {
        match self.store.entry(fold(setting.key())) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(setting);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(setting),
        }
    }

    /// Store a `key=value` setting.
    /// See [`SettingsStore::set`].
    ///
    /// Fails with [`ArgError::InvalidKey`] if the key is empty.
    pub fn set_value(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<&Setting, ArgError> {
        normalize(key)?;
        Ok(self.set(Setting::new(key, value)?))
    }

    /// Store a bare flag setting (no value).
    /// See [`SettingsStore::set`].
    ///
    /// Fails with [`ArgError::InvalidKey`] if the key is empty.
    pub fn set_flag(&mut self, key: &str) -> Result<&Setting, ArgError> {
        normalize(key)?;
        Ok(self.set(Setting::flag(key)?))
    }

    /// Remove and return the setting for `key`, if present.
    ///
    /// Fails with [`ArgError::InvalidKey`] if the key is empty.
    pub fn remove(&mut self, key: &str) -> Result<Option<Setting>, ArgError> {
        Ok(self.store.remove(&normalize(key)?))
    }
}

impl FromIterator<Setting> for SettingsStore {
    fn from_iter<I: IntoIterator<Item = Setting>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl Extend<Setting> for SettingsStore {
    fn extend<I: IntoIterator<Item = Setting>>(&mut self, iter: I) {
        for setting in iter {
            self.set(setting);
        }
    }
}
