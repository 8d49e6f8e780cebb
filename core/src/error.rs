//! Dispatch error types.
//!
//! The scan has exactly two failure modes: a required-arity option with no
//! following token, and a failure raised by a caller-supplied handler.
//! Everything else the scan encounters (unknown option-like tokens, excess
//! positionals, duplicate registrations) is a silent no-op by design.

use thiserror::Error;

use crate::types::HandlerError;

/// Errors that abort a dispatch scan.
///
/// Both variants are fatal to the current scan: tokens after the failure
/// point are left unprocessed, and handlers already invoked stay invoked.
///
/// # Examples
///
/// ```
/// use argroute_core::{Arity, DispatchError, Dispatcher};
///
/// let mut dispatcher = Dispatcher::new(["-o"]);
/// dispatcher.register_option(["-o"], Arity::Required, |_| Ok(()));
///
/// let err = dispatcher.run().unwrap_err();
/// assert!(matches!(err, DispatchError::MissingArgument { option } if option == "-o"));
/// ```
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required-arity option was the last token and had no value.
    #[error("option `{option}` requires an argument, but none is given")]
    MissingArgument {
        /// The option name as it appeared in the token sequence.
        option: String,
    },
    /// A caller-supplied handler failed.
    ///
    /// `context` names the option that triggered the handler, or the
    /// positional token itself. The underlying failure is preserved
    /// unmodified as the error source.
    #[error("handler for `{context}` failed")]
    Handler {
        /// Option name or positional token being processed.
        context: String,
        #[source]
        source: HandlerError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_display_names_the_option() {
        let err = DispatchError::MissingArgument {
            option: "--output".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "option `--output` requires an argument, but none is given"
        );
    }

    #[test]
    fn test_handler_error_preserves_source() {
        let source: HandlerError = "bad value".into();
        let err = DispatchError::Handler {
            context: "-o".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "handler for `-o` failed");
        assert_eq!(
            std::error::Error::source(&err).unwrap().to_string(),
            "bad value"
        );
    }
}
