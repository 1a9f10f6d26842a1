//! Form buffers bound to input fields.
//!
//! Each buffer mirrors one input form. Inputs change it field-by-field through
//! [`FormBuffer::set_field`], and a successful submit resets it with
//! [`FormBuffer::clear`].

mod credentials;

pub use credentials::Credentials;

use crate::error::Result;

/// A record of named input fields.
pub trait FormBuffer: Default {
    /// Short form name used in messages and commands.
    const NAME: &'static str;

    /// Input names this buffer binds, in display order.
    fn field_names() -> &'static [&'static str];

    /// Applies an input change to the named field.
    fn set_field(&mut self, name: &str, value: &str) -> Result<()>;

    /// Returns true when every field is empty.
    fn is_blank(&self) -> bool;

    /// Resets every field to empty.
    fn clear(&mut self) {
        *self = Self::default();
    }
}
