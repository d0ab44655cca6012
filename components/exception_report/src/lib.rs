//! Exception capture and structured error reports.
//!
//! This crate turns a runtime exception or diagnostic raised inside an
//! embedded script engine into a JSON error report that the host runtime
//! stores per execution context and later surfaces as a formatted stack
//! trace.
//!
//! The engine itself is an external collaborator, reached through the
//! [`Engine`] trait. The capture path is:
//!
//! 1. The host detects a failed engine call and offers the thrown value to
//!    [`capture_exception`] (or a ready-made [`Diagnostic`] to
//!    [`capture_diagnostic`]).
//! 2. If a forced termination is in flight, a [`TerminationPause`] clears
//!    the signal for the duration of one capture and restores it on exit.
//! 3. The engine synthesizes a [`Diagnostic`] for the thrown value, the
//!    encoder serializes it into an [`ErrorReport`], and the JSON lands in
//!    the context's report slot where the host reads it.
//!
//! [`Diagnostic`]: core_types::Diagnostic

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod capture;
pub mod context;
pub mod report;

pub use capture::{
    capture_diagnostic, capture_exception, encode_exception, Engine, TerminationPause,
};
pub use context::{ExecutionContext, TerminationFlag};
pub use report::{CallFrameReport, ErrorReport, ReportFrame, ScriptOriginReport};
