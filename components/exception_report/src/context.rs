//! Execution context: report slot and termination signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative flag signaling that the engine is being forced to stop
/// executing script.
///
/// The host raises it (possibly from a watchdog thread) to interrupt a
/// runaway script; the engine checks it between bytecode dispatches. The
/// capture path clears it for at most the duration of one capture, via
/// [`TerminationPause`](crate::TerminationPause).
#[derive(Debug, Default)]
pub struct TerminationFlag {
    raised: AtomicBool,
}

impl TerminationFlag {
    /// Create a flag in the not-raised state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal termination.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Withdraw the termination signal, re-enabling script execution.
    pub fn clear(&self) {
        self.raised.store(false, Ordering::SeqCst);
    }

    /// Check whether termination is currently signaled.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

/// Per-execution-context state owned by the embedder.
///
/// Owns the report slot directly, so storing a report is a plain field
/// write with no registry lookup. One context corresponds to one isolated
/// script environment; the engine guarantees no concurrent mutation of a
/// context's state.
///
/// # Examples
///
/// ```
/// use exception_report::ExecutionContext;
///
/// let mut ctx = ExecutionContext::new();
/// assert!(ctx.last_report().is_none());
///
/// ctx.store_report("{\"message\":\"boom\"}".to_string());
/// assert!(ctx.last_report().is_some());
/// assert!(ctx.take_report().is_some());
/// assert!(ctx.last_report().is_none());
/// ```
#[derive(Debug, Default)]
pub struct ExecutionContext {
    /// Termination signal; shared so a watchdog thread can raise it
    termination: Arc<TerminationFlag>,
    /// Most recent serialized report; overwritten, never queued
    last_report: Option<String>,
}

impl ExecutionContext {
    /// Create a fresh context with no pending report or termination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that script execution in this context must stop.
    pub fn terminate(&self) {
        self.termination.raise();
    }

    /// Check whether termination is currently signaled.
    pub fn is_terminating(&self) -> bool {
        self.termination.is_raised()
    }

    /// Get a shared handle to the termination flag.
    ///
    /// Hand this to a watchdog thread, or to a
    /// [`TerminationPause`](crate::TerminationPause).
    pub fn termination_handle(&self) -> Arc<TerminationFlag> {
        Arc::clone(&self.termination)
    }

    /// Overwrite the report slot with a serialized report.
    ///
    /// The slot holds at most the latest report; any previous one is
    /// discarded.
    pub fn store_report(&mut self, json: String) {
        self.last_report = Some(json);
    }

    /// Read the report slot without consuming it.
    pub fn last_report(&self) -> Option<&str> {
        self.last_report.as_deref()
    }

    /// Take the report out of the slot, leaving it empty.
    pub fn take_report(&mut self) -> Option<String> {
        self.last_report.take()
    }
}
