//! Traits which, typically, may be imported without concern: `use easyargs::prelude::*`.

/// Behaviour for one or many keys to be looked up, in order.
///
/// Store queries and assertions accept any `Keys`, so a single key and an ordered sequence of keys share one operation.
///
/// ### Example
/// ```
/// # use easyargs_core as easyargs;
/// use easyargs::prelude::*;
///
/// assert_eq!("a".key_list(), vec!["a"]);
/// assert_eq!(["a", "b"].key_list(), vec!["a", "b"]);
/// assert_eq!(vec!["b".to_string(), "a".to_string()].key_list(), vec!["b", "a"]);
/// ```
pub trait Keys {
    /// The keys, in lookup order.
    fn key_list(&self) -> Vec<&str>;
}

impl Keys for str {
    fn key_list(&self) -> Vec<&str> {
        vec![self]
    }
}

impl Keys for String {
    fn key_list(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl<K: AsRef<str>> Keys for [K] {
    fn key_list(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<K: AsRef<str>, const N: usize> Keys for [K; N] {
    fn key_list(&self) -> Vec<&str> {
        self.as_slice().key_list()
    }
}

impl<K: AsRef<str>> Keys for Vec<K> {
    fn key_list(&self) -> Vec<&str> {
        self.as_slice().key_list()
    }
}

impl<T: Keys + ?Sized> Keys for &T {
    fn key_list(&self) -> Vec<&str> {
        (**self).key_list()
    }
}
