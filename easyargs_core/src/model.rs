use crate::error::ArgError;

/// A single key/value entry.
///
/// The key is trimmed and never empty.
/// Its identity is case-insensitive once placed in a [`SettingsStore`](crate::SettingsStore), although the original casing is retained for display.
/// The value is optional: `None` for a bare flag (ex: `-verbose`), and possibly an empty string (ex: `verbose=`).
///
/// ### Example
/// ```
/// # use easyargs_core as easyargs;
/// use easyargs::Setting;
///
/// let setting = Setting::new(" Out ", "a.txt").unwrap();
/// assert_eq!(setting.key(), "Out");
/// assert_eq!(setting.value(), Some("a.txt"));
/// assert_eq!(setting.to_string(), "Out=a.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    key: String,
    value: Option<String>,
}

impl Setting {
    /// Create a setting with a value.
    /// The key is trimmed; the value is kept verbatim.
    ///
    /// Fails with [`ArgError::InvalidSetting`] when the key is empty after trimming.
    pub fn new(key: impl AsRef<str>, value: impl Into<String>) -> Result<Self, ArgError> {
        Self::build(key.as_ref(), Some(value.into()))
    }

    /// Create a setting without a value (a bare flag).
    ///
    /// Fails with [`ArgError::InvalidSetting`] when the key is empty after trimming.
    ///
    /// ### Example
    /// ```
    /// # use easyargs_core as easyargs;
    /// use easyargs::Setting;
    ///
    /// let setting = Setting::flag("verbose").unwrap();
    /// assert!(setting.is_flag());
    /// assert_eq!(setting.value(), None);
    /// ```
    pub fn flag(key: impl AsRef<str>) -> Result<Self, ArgError> {
        Self::build(key.as_ref(), None)
    }

    /// Create a setting from a raw `[key]` or `[key, value]` pair.
    ///
    /// Fails with [`ArgError::InvalidSetting`] when the pair is empty, has more than two elements, or the key is empty after trimming.
    ///
    /// ### Example
    /// ```
    /// # use easyargs_core as easyargs;
    /// use easyargs::{ArgError, Setting};
    ///
    /// assert_eq!(Setting::from_pair(&["in", "x"]).unwrap().value(), Some("x"));
    /// assert_eq!(Setting::from_pair(&["in"]).unwrap().value(), None);
    /// assert!(matches!(Setting::from_pair(&[]), Err(ArgError::InvalidSetting(_))));
    /// ```
    pub fn from_pair(pair: &[&str]) -> Result<Self, ArgError> {
        match pair {
            [key] => Self::build(key, None),
            [key, value] => Self::build(key, Some(value.to_string())),
            [] => Err(ArgError::InvalidSetting("empty pair".to_string())),
            _ => Err(ArgError::InvalidSetting(format!(
                "pair has {} elements, expected at most 2",
                pair.len()
            ))),
        }
    }

    fn build(key: &str, value: Option<String>) -> Result<Self, ArgError> {
        let key = key.trim();

        if key.is_empty() {
            return Err(ArgError::InvalidSetting("empty key".to_string()));
        }

        Ok(Self {
            key: key.to_string(),
            value,
        })
    }

    /// The (trimmed) key, in its original casing.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether this setting carries no value.
    pub fn is_flag(&self) -> bool {
        self.value.is_none()
    }

    /// Replace the value.
    /// Any string is accepted, including the empty string; no trimming is applied.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value.replace(value.into());
    }

    /// Produce a new setting with a different key and the same value.
    ///
    /// Keys are never changed in place.
    /// Fails with [`ArgError::InvalidKey`] when the key is empty after trimming, leaving `self` untouched.
    ///
    /// ### Example
    /// ```
    /// # use easyargs_core as easyargs;
    /// use easyargs::Setting;
    ///
    /// let original = Setting::new("in", "x").unwrap();
    /// let renamed = original.with_key("input").unwrap();
    /// assert_eq!(renamed.key(), "input");
    /// assert_eq!(renamed.value(), Some("x"));
    /// assert!(original.with_key("  ").is_err());
    /// ```
    pub fn with_key(&self, key: impl AsRef<str>) -> Result<Self, ArgError> {
        let raw = key.as_ref();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ArgError::InvalidKey(raw.to_string()));
        }

        Ok(Self {
            key: trimmed.to_string(),
            value: self.value.clone(),
        })
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => write!(f, "{}", self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("key", "key")]
    #[case(" key", "key")]
    #[case("key\t", "key")]
    #[case(" Mixed Case ", "Mixed Case")]
    fn new(#[case] key: &str, #[case] expected: &str) {
        // Execute
        let setting = Setting::new(key, " value ").unwrap();

        // Verify
        assert_eq!(setting.key(), expected);
        assert_eq!(setting.value(), Some(" value "));
        assert!(!setting.is_flag());
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t \n")]
    fn new_empty_key(#[case] key: &str) {
        assert_matches!(Setting::new(key, "value"), Err(ArgError::InvalidSetting(_)));
        assert_matches!(Setting::flag(key), Err(ArgError::InvalidSetting(_)));
    }

    #[test]
    fn new_empty_value() {
        let setting = Setting::new("key", "").unwrap();
        assert_eq!(setting.value(), Some(""));
        assert!(!setting.is_flag());
    }

    #[test]
    fn flag() {
        let setting = Setting::flag("verbose").unwrap();
        assert_eq!(setting.key(), "verbose");
        assert_eq!(setting.value(), None);
        assert!(setting.is_flag());
    }

    #[rstest]
    #[case(vec!["k"], "k", None)]
    #[case(vec![" k "], "k", None)]
    #[case(vec!["k", "v"], "k", Some("v"))]
    #[case(vec!["k", ""], "k", Some(""))]
    fn from_pair(
        #[case] pair: Vec<&str>,
        #[case] expected_key: &str,
        #[case] expected_value: Option<&str>,
    ) {
        // Execute
        let setting = Setting::from_pair(pair.as_slice()).unwrap();

        // Verify
        assert_eq!(setting.key(), expected_key);
        assert_eq!(setting.value(), expected_value);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![""])]
    #[case(vec!["  ", "v"])]
    #[case(vec!["k", "v", "extra"])]
    fn from_pair_invalid(#[case] pair: Vec<&str>) {
        assert_matches!(
            Setting::from_pair(pair.as_slice()),
            Err(ArgError::InvalidSetting(_))
        );
    }

    #[test]
    fn set_value() {
        // Setup
        let mut setting = Setting::flag("k").unwrap();

        // Execute
        setting.set_value(" padded ");

        // Verify
        assert_eq!(setting.value(), Some(" padded "));
        setting.set_value("");
        assert_eq!(setting.value(), Some(""));
    }

    #[test]
    fn with_key() {
        // Setup
        let setting = Setting::new("a", "1").unwrap();

        // Execute
        let renamed = setting.with_key(" b ").unwrap();

        // Verify
        assert_eq!(renamed, Setting::new("b", "1").unwrap());
        assert_eq!(setting.key(), "a");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn with_key_empty(#[case] key: &str) {
        let setting = Setting::new("a", "1").unwrap();
        assert_matches!(setting.with_key(key), Err(ArgError::InvalidKey(k)) => {
            assert_eq!(k, key);
        });
        assert_eq!(setting.key(), "a");
    }

    #[rstest]
    #[case(Setting::new("a", "1").unwrap(), "a=1")]
    #[case(Setting::new("a", "").unwrap(), "a=")]
    #[case(Setting::flag("A").unwrap(), "A")]
    fn display(#[case] setting: Setting, #[case] expected: &str) {
        assert_eq!(setting.to_string(), expected);
    }
}
