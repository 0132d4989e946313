//! Validation of footprint names used as library keys.

use crate::error::CoreError;

/// Path separators that may not appear in a library name. Whitespace is
/// rejected as well.
const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

const INVALID_CHARS_RAW: &str = " \t\n\r/\\";
const INVALID_CHARS_READABLE: &str = "'space' 'tab' 'line feed' 'return' / \\";

fn is_invalid_char(c: char) -> bool {
    c.is_whitespace() || PATH_SEPARATORS.contains(&c)
}

/// True when `name` can key a footprint in a library.
pub fn is_lib_name_valid(name: &str) -> bool {
    !name.chars().any(is_invalid_char)
}

/// The characters refused by [`is_lib_name_valid`], either raw or spelled
/// out for messages.
pub fn lib_name_invalid_chars(user_readable: bool) -> &'static str {
    if user_readable {
        INVALID_CHARS_READABLE
    } else {
        INVALID_CHARS_RAW
    }
}

/// Like [`is_lib_name_valid`] but names the first offending character.
pub fn validate_lib_name(name: &str) -> Result<(), CoreError> {
    match name.chars().find(|c| is_invalid_char(*c)) {
        None => Ok(()),
        Some(c) => Err(CoreError::InvalidLibName {
            name: name.to_string(),
            invalid: format!("{:?}", c),
        }),
    }
}
