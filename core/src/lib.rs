//! Callback-driven argument dispatcher.
//!
//! This crate routes a raw sequence of invocation tokens to caller-supplied
//! handlers in a single left-to-right pass:
//!
//! - [`Dispatcher`] — owns the token list, the option registry, and the
//!   positional-handler list, and executes the scan.
//! - [`Arity`] — whether an option takes no value, must take one, or may
//!   take one when the next token is not itself a registered option.
//! - [`DispatchError`] — the two ways a scan can fail: a required value
//!   that is missing, or a handler that fails.
//!
//! Unlike schema-first parsers, the dispatcher holds no model of what the
//! command line should look like: a token either equals a registered
//! option name or it is positional, and every interpretation of values is
//! left to the handlers. There is no help-text generation, no prefix
//! matching, no `-abc` bundling, and no `--opt=value` splitting.
//!
//! # Example
//!
//! ```
//! use std::cell::{Cell, RefCell};
//! use argroute_core::{Arity, Dispatcher};
//!
//! let verbose = Cell::new(false);
//! let output = RefCell::new(String::new());
//! let input = RefCell::new(String::new());
//!
//! let mut dispatcher = Dispatcher::new(["-v", "input.txt", "-o", "out.txt"]);
//! dispatcher
//!     .register_option(["-v", "--verbose"], Arity::None, |_| {
//!         verbose.set(true);
//!         Ok(())
//!     })
//!     .register_option(["-o", "--output"], Arity::Required, |value| {
//!         *output.borrow_mut() = value.to_string();
//!         Ok(())
//!     })
//!     .register_positional(|token| {
//!         *input.borrow_mut() = token.to_string();
//!         Ok(())
//!     });
//! dispatcher.run().unwrap();
//!
//! assert!(verbose.get());
//! assert_eq!(*input.borrow(), "input.txt");
//! assert_eq!(*output.borrow(), "out.txt");
//! ```

mod dispatch;
mod error;
mod types;

pub use dispatch::Dispatcher;
pub use error::DispatchError;
pub use types::{Arity, Handler, HandlerError};
