//! Handler and option descriptor types for the dispatcher.
//!
//! The dispatcher routes each token to a caller-supplied callback. This
//! module defines the callback shape ([`Handler`], [`HandlerError`]), the
//! arity of an option ([`Arity`]), and the internal descriptor that binds
//! the two together.

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

/// Boxed error returned by a failing handler.
///
/// The dispatcher never inspects or interprets this value; it is wrapped
/// in [`DispatchError::Handler`](crate::DispatchError::Handler) and
/// surfaced to the caller unchanged.
pub type HandlerError = Box<dyn Error + Send + Sync>;

/// Callback invoked with an option value or a positional token.
///
/// Receives the empty string when an option carries no value (arity
/// [`Arity::None`], or [`Arity::Optional`] without a following value).
/// Handlers may mutate captured state and may fail; a failure aborts the
/// scan at that point.
pub type Handler<'a> = Box<dyn FnMut(&str) -> Result<(), HandlerError> + 'a>;

/// How many following tokens an option claims as its value.
///
/// # Examples
///
/// ```
/// use argroute_core::Arity;
///
/// assert_eq!(Arity::default(), Arity::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    /// The option takes no value; its handler receives `""`.
    #[default]
    None,
    /// The option must be followed by a value token. A missing value
    /// aborts the scan.
    Required,
    /// The option takes the following token as its value unless that
    /// token is itself a registered option name, in which case the
    /// handler receives `""`.
    Optional,
}

/// Descriptor bound to a registered option name.
///
/// Aliases registered together share one descriptor, so cloning is an
/// `Rc` bump rather than a handler copy.
#[derive(Clone)]
pub(crate) struct OptionSpec<'a> {
    pub(crate) arity: Arity,
    pub(crate) handler: Rc<RefCell<Handler<'a>>>,
}
