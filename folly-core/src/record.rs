//! Field-level updates for delimited relationship records.
//!
//! Host relationship data (gift tastes, dialogue tables) is stored as one
//! string per recipient, with fixed-position fields joined by a delimiter:
//!
//! ```text
//! love line / love items / like line / like items / dislike line / ...
//!     0            1           2           3             4
//! ```
//!
//! [`update_entry`] rewrites selected fields while keeping the field count and
//! delimiter intact. Addressing a field past the end is an error rather than
//! a silent resize.

use crate::error::{FollyError, Result};

/// How [`update_entry`] applies the new fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUpdate {
    /// Join new values onto existing ones with a space instead of overwriting.
    pub append: bool,
    /// Replace the entire field list with the new fields.
    pub replace: bool,
    /// First field position the new fields are written to.
    pub start_index: usize,
    /// Field delimiter.
    pub delimiter: char,
}

impl FieldUpdate {
    /// Overwrite fields starting at `start_index`.
    #[must_use]
    pub fn at(start_index: usize) -> Self {
        Self {
            start_index,
            ..Self::default()
        }
    }

    /// Use a different delimiter.
    #[must_use]
    pub fn delimited_by(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Append to existing values instead of overwriting.
    #[must_use]
    pub fn appending(mut self) -> Self {
        self.append = true;
        self
    }

    /// Replace the whole record.
    #[must_use]
    pub fn replacing() -> Self {
        Self {
            replace: true,
            ..Self::default()
        }
    }
}

impl Default for FieldUpdate {
    fn default() -> Self {
        Self {
            append: false,
            replace: false,
            start_index: 0,
            delimiter: '/',
        }
    }
}

/// Split a record into its fields.
#[must_use]
pub fn split_fields(record: &str, delimiter: char) -> Vec<&str> {
    record.split(delimiter).collect()
}

/// Update selected fields of a delimited record.
///
/// `new_fields[i]` is written into field `start_index + i`; `None` entries are
/// placeholders that leave the corresponding field untouched. In replace mode
/// the whole field list becomes `new_fields`, with placeholders rendered as
/// empty fields.
///
/// # Errors
/// Returns `FollyError::FieldOutOfBounds` if any non-placeholder position
/// falls outside the existing record. Nothing is written in that case.
pub fn update_entry(old: &str, new_fields: &[Option<&str>], update: &FieldUpdate) -> Result<String> {
    let delimiter = update.delimiter.to_string();

    if update.replace {
        let fields: Vec<&str> = new_fields.iter().map(|f| f.unwrap_or_default()).collect();
        return Ok(fields.join(&delimiter));
    }

    let mut fields: Vec<String> = old.split(update.delimiter).map(str::to_string).collect();
    let field_count = fields.len();

    for (i, value) in new_fields.iter().enumerate() {
        let Some(value) = value else { continue };
        let index = update.start_index.checked_add(i).ok_or(FollyError::FieldOutOfBounds {
            index: usize::MAX,
            field_count,
        })?;
        let field = fields
            .get_mut(index)
            .ok_or(FollyError::FieldOutOfBounds { index, field_count })?;
        if update.append {
            field.push(' ');
            field.push_str(value);
        } else {
            *field = (*value).to_string();
        }
    }

    Ok(fields.join(&delimiter))
}
