//! Exception capture: translator and termination guard.
//!
//! Entry points for the host runtime after a failed engine call. The thrown
//! value (or a ready-made diagnostic) is translated into an [`ErrorReport`]
//! and stored in the context's report slot. When a forced termination is in
//! flight, [`TerminationPause`] briefly re-enables the engine so the error
//! value can be constructed, and restores the signal on every exit path.

use core_types::{Diagnostic, Value};
use std::sync::Arc;

use crate::context::{ExecutionContext, TerminationFlag};
use crate::report::ErrorReport;

/// Seam to the embedded script engine.
///
/// The engine itself is an external collaborator; the capture path only
/// needs the two facilities below.
pub trait Engine {
    /// Synthesize a diagnostic describing an arbitrary thrown value.
    ///
    /// Must succeed for any value, including primitives that carry no
    /// location or stack information of their own.
    fn create_diagnostic(&mut self, ctx: &ExecutionContext, thrown: &Value) -> Diagnostic;

    /// Construct an Error-shaped value carrying the given message text.
    ///
    /// Constructing it may transiently run engine machinery, which the
    /// engine refuses while termination is signaled; callers pause the
    /// signal first.
    fn error_value(&mut self, message: &str) -> Value;
}

/// Scoped suspension of the termination signal.
///
/// Clears the flag on construction and re-raises it when dropped, on every
/// exit path including unwinds. The signal is never left cleared longer
/// than the guard's scope.
#[derive(Debug)]
pub struct TerminationPause {
    termination: Arc<TerminationFlag>,
}

impl TerminationPause {
    /// Suspend the termination signal until the returned guard is dropped.
    pub fn new(termination: Arc<TerminationFlag>) -> Self {
        termination.clear();
        Self { termination }
    }
}

impl Drop for TerminationPause {
    fn drop(&mut self) {
        self.termination.raise();
    }
}

/// Translate a thrown value into a report without storing it.
///
/// Asks the engine to synthesize a diagnostic for the value, then encodes
/// it. No independent failure mode.
pub fn encode_exception<E: Engine>(
    engine: &mut E,
    ctx: &ExecutionContext,
    thrown: &Value,
) -> ErrorReport {
    let diagnostic = engine.create_diagnostic(ctx, thrown);
    ErrorReport::from_diagnostic(&diagnostic)
}

/// Capture a thrown value into the context's report slot.
///
/// If termination is signaled, the signal is paused for the duration of one
/// capture: a null or undefined value is replaced by a synthetic
/// `"execution terminated"` error, the ordinary capture path runs exactly
/// once, and the signal is observed raised again when this returns.
pub fn capture_exception<E: Engine>(engine: &mut E, ctx: &mut ExecutionContext, thrown: Value) {
    if ctx.is_terminating() {
        let _pause = TerminationPause::new(ctx.termination_handle());
        let thrown = if thrown.is_null_or_undefined() {
            engine.error_value("execution terminated")
        } else {
            thrown
        };
        store_exception(engine, ctx, &thrown);
        return;
    }
    store_exception(engine, ctx, &thrown);
}

/// Capture a ready-made diagnostic into the context's report slot.
///
/// Used for engine message callbacks that hand over a diagnostic directly.
/// While the engine unwinds for termination the diagnostic may be unusable,
/// so the capture restarts through the guarded path with no thrown value.
pub fn capture_diagnostic<E: Engine>(
    engine: &mut E,
    ctx: &mut ExecutionContext,
    diagnostic: &Diagnostic,
) {
    if ctx.is_terminating() {
        capture_exception(engine, ctx, Value::Undefined);
        return;
    }
    store_report(ctx, &ErrorReport::from_diagnostic(diagnostic));
}

fn store_exception<E: Engine>(engine: &mut E, ctx: &mut ExecutionContext, thrown: &Value) {
    let report = encode_exception(engine, ctx, thrown);
    store_report(ctx, &report);
}

fn store_report(ctx: &mut ExecutionContext, report: &ErrorReport) {
    // Serialization of ErrorReport cannot fail; a failure here is a broken
    // subsystem invariant, not a user-facing error.
    let json = report
        .to_json()
        .expect("error report serialization is infallible");
    ctx.store_report(json);
}
