//! Core types for script-engine error reporting.
//!
//! This crate provides the foundational types shared by the exception
//! reporting subsystem: the thrown-value representation, engine diagnostics,
//! and call-stack frames.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of values script code can throw
//! - [`Diagnostic`] - Engine-produced description of one error
//! - [`StackFrame`] - Call stack frame information
//! - [`error_level`] - Severity constants for [`Diagnostic`]
//!
//! # Examples
//!
//! ```
//! use core_types::{Diagnostic, Value};
//!
//! let thrown = Value::String("boom".to_string());
//! assert!(!thrown.is_null_or_undefined());
//! assert_eq!(thrown.type_of(), "string");
//!
//! let diagnostic = Diagnostic::new("Uncaught Error: boom", "main.js");
//! assert!(diagnostic.frames.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod diagnostic;
mod value;

pub use diagnostic::{error_level, Diagnostic, StackFrame, UNKNOWN_SCRIPT};
pub use value::Value;
