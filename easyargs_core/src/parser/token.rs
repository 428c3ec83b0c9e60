use crate::constant::{PREFIXES, SEPARATORS};
use crate::error::ArgError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Split a raw token into its key and (optional) value portions.
///
/// Only the first separator is used, so `a=b:c` splits into `a` and `b:c`.
/// The key is right-trimmed and stripped of one prefix; the value is trimmed.
/// A separator as the final character yields an empty value, rather than none.
pub(crate) fn split_token(token: &str) -> Result<(&str, Option<&str>), ArgError> {
    let (key, value) = match token.split_once(&SEPARATORS[..]) {
        Some(("", _)) => return Err(ArgError::InvalidKey(token.to_string())),
        Some((key, value)) => (key.trim_end(), Some(value.trim())),
        None => (token, None),
    };

    let key = match key.strip_prefix(&PREFIXES[..]) {
        Some("") => return Err(ArgError::InvalidArgument(token.to_string())),
        Some(stripped) => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Stripped prefix from '{key}'.");
            }

            stripped.trim_end()
        }
        None => key,
    };

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Split token '{token}' into key '{key}', value {value:?}.");
    }

    Ok((key, value))
}
