//! The dispatcher: option registry, positional-handler list, and the
//! single left-to-right scan that drives all handler invocations.
//!
//! Dispatch is a one-pass walk over the token sequence. Each token either
//! matches a registered option name exactly (and claims zero or one
//! following tokens depending on its [`Arity`]) or is routed to the next
//! positional handler in registration order. There is no prefix matching,
//! no combined short options, and no `--opt=value` splitting; a token
//! either equals a registered name or it is positional.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::error::DispatchError;
use crate::types::{Arity, Handler, HandlerError, OptionSpec};

/// Classifies tokens into options and positionals, invoking a callback
/// for each match in left-to-right order.
///
/// Built in two phases: registration ([`register_option`] and
/// [`register_positional`]) followed by exactly one [`run`]. Handlers
/// borrow for the lifetime `'a`, so captured state is typically a
/// [`Cell`](std::cell::Cell) or [`RefCell`] read back after the scan.
///
/// [`register_option`]: Dispatcher::register_option
/// [`register_positional`]: Dispatcher::register_positional
/// [`run`]: Dispatcher::run
///
/// # Examples
///
/// ```
/// use std::cell::{Cell, RefCell};
/// use argroute_core::{Arity, Dispatcher};
///
/// let verbose = Cell::new(false);
/// let output = RefCell::new(String::new());
/// let inputs = RefCell::new(Vec::new());
///
/// let mut dispatcher = Dispatcher::new(["-v", "input.txt", "-o", "out.txt"]);
/// dispatcher
///     .register_option(["-v", "--verbose"], Arity::None, |_| {
///         verbose.set(true);
///         Ok(())
///     })
///     .register_option(["-o", "--output"], Arity::Required, |value| {
///         *output.borrow_mut() = value.to_string();
///         Ok(())
///     })
///     .register_positional(|token| {
///         inputs.borrow_mut().push(token.to_string());
///         Ok(())
///     });
/// dispatcher.run().unwrap();
///
/// assert!(verbose.get());
/// assert_eq!(*output.borrow(), "out.txt");
/// assert_eq!(*inputs.borrow(), vec!["input.txt".to_string()]);
/// ```
pub struct Dispatcher<'a> {
    tokens: Vec<String>,
    options: HashMap<String, OptionSpec<'a>>,
    positionals: Vec<Handler<'a>>,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher over a token sequence.
    ///
    /// The tokens are the invocation arguments with the program name
    /// already excluded; they are captured verbatim, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use argroute_core::Dispatcher;
    ///
    /// let mut dispatcher = Dispatcher::new(["-v", "file.txt"]);
    /// dispatcher.run().unwrap();
    /// ```
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            options: HashMap::new(),
            positionals: Vec::new(),
        }
    }

    /// Creates a dispatcher over the current process arguments, skipping
    /// the program name.
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }

    /// Binds every name in `names` to one shared descriptor.
    ///
    /// All names registered in a single call are aliases: they share the
    /// arity and the handler. An empty `names` is a no-op. Re-registering
    /// an existing name silently overwrites it; the newest registration
    /// wins. Returns the dispatcher for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use argroute_core::{Arity, Dispatcher};
    ///
    /// let count = Cell::new(0u32);
    /// let mut dispatcher = Dispatcher::new(["-v", "--verbose"]);
    /// dispatcher.register_option(["-v", "--verbose"], Arity::None, |_| {
    ///     count.set(count.get() + 1);
    ///     Ok(())
    /// });
    /// dispatcher.run().unwrap();
    ///
    /// // Aliases are independent names: each match fires the handler.
    /// assert_eq!(count.get(), 2);
    /// ```
    pub fn register_option<I, N, F>(&mut self, names: I, arity: Arity, handler: F) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
        F: FnMut(&str) -> Result<(), HandlerError> + 'a,
    {
        let spec = OptionSpec {
            arity,
            handler: Rc::new(RefCell::new(Box::new(handler) as Handler<'a>)),
        };
        for name in names {
            self.options.insert(name.into(), spec.clone());
        }
        self
    }

    /// Appends one positional handler.
    ///
    /// The i-th non-option token encountered during the scan is routed to
    /// the i-th positional handler, in registration order. Once the list
    /// is exhausted, further non-option tokens are silently discarded.
    /// Returns the dispatcher for chaining.
    pub fn register_positional<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&str) -> Result<(), HandlerError> + 'a,
    {
        self.positionals.push(Box::new(handler));
        self
    }

    /// Consumes the token sequence in a single left-to-right pass,
    /// invoking the handler for each match.
    ///
    /// Fails with [`DispatchError::MissingArgument`] when a
    /// required-arity option has no following token, and with
    /// [`DispatchError::Handler`] when a handler itself fails. Either
    /// failure aborts the scan at that point: handlers already invoked
    /// stay invoked and the remaining tokens are left unprocessed.
    ///
    /// The cursor and positional pointer are local to this call, so a
    /// second `run` on the same dispatcher repeats the whole scan from
    /// the beginning.
    pub fn run(&mut self) -> Result<(), DispatchError> {
        debug!(tokens = self.tokens.len(), "starting dispatch scan");
        let mut cursor = 0;
        let mut next_positional = 0;

        while cursor < self.tokens.len() {
            let token = &self.tokens[cursor];
            let Some(spec) = self.options.get(token).cloned() else {
                // Not a registered option name: positional, or discarded
                // once the positional list is exhausted.
                if let Some(handler) = self.positionals.get_mut(next_positional) {
                    trace!(%token, index = next_positional, "positional");
                    (*handler)(token).map_err(|source| DispatchError::Handler {
                        context: token.clone(),
                        source,
                    })?;
                    next_positional += 1;
                } else {
                    trace!(%token, "no positional handler left, discarding");
                }
                cursor += 1;
                continue;
            };

            match spec.arity {
                Arity::None => {
                    trace!(option = %token, "option without value");
                    invoke(&spec, token, "")?;
                    cursor += 1;
                }
                Arity::Required => match self.tokens.get(cursor + 1) {
                    Some(value) => {
                        trace!(option = %token, %value, "option with required value");
                        invoke(&spec, token, value)?;
                        cursor += 2;
                    }
                    None => {
                        return Err(DispatchError::MissingArgument {
                            option: token.clone(),
                        });
                    }
                },
                Arity::Optional => match self.tokens.get(cursor + 1) {
                    // An optional option never steals a token that is
                    // itself a registered option name.
                    Some(value) if !self.options.contains_key(value) => {
                        trace!(option = %token, %value, "option with optional value");
                        invoke(&spec, token, value)?;
                        cursor += 2;
                    }
                    _ => {
                        trace!(option = %token, "option without optional value");
                        invoke(&spec, token, "")?;
                        cursor += 1;
                    }
                },
            }
        }

        debug!("dispatch scan complete");
        Ok(())
    }
}

/// Invokes an option handler, attaching the option name as context on
/// failure.
fn invoke(spec: &OptionSpec<'_>, name: &str, value: &str) -> Result<(), DispatchError> {
    let mut handler = spec.handler.borrow_mut();
    (*handler)(value).map_err(|source| DispatchError::Handler {
        context: name.to_string(),
        source,
    })
}
