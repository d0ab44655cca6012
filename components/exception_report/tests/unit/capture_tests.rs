//! Unit tests for exception capture and the termination guard

use core_types::{Diagnostic, Value};
use exception_report::{
    capture_diagnostic, capture_exception, encode_exception, Engine, ErrorReport,
    ExecutionContext, TerminationFlag, TerminationPause,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Engine stand-in that records how the capture path drives it.
#[derive(Default)]
struct MockEngine {
    /// Termination state observed at each create_diagnostic call
    diagnosed_while_terminating: Vec<bool>,
    /// Number of synthetic error values constructed
    error_values_created: usize,
}

impl Engine for MockEngine {
    fn create_diagnostic(&mut self, ctx: &ExecutionContext, thrown: &Value) -> Diagnostic {
        self.diagnosed_while_terminating.push(ctx.is_terminating());
        let message = match thrown {
            Value::String(s) => s.clone(),
            other => format!("Uncaught [{}]", other.type_of()),
        };
        Diagnostic::new(message, "mock.js")
    }

    fn error_value(&mut self, message: &str) -> Value {
        self.error_values_created += 1;
        Value::String(message.to_string())
    }
}

fn stored_report(ctx: &ExecutionContext) -> ErrorReport {
    ErrorReport::from_json(ctx.last_report().expect("a report must be stored")).unwrap()
}

#[test]
fn test_capture_stores_report_in_slot() {
    let mut engine = MockEngine::default();
    let mut ctx = ExecutionContext::new();

    capture_exception(&mut engine, &mut ctx, Value::String("boom".to_string()));

    assert_eq!(stored_report(&ctx).message, "boom");
    assert_eq!(stored_report(&ctx).script_resource_name, "mock.js");
}

#[test]
fn test_capture_without_termination_synthesizes_nothing() {
    let mut engine = MockEngine::default();
    let mut ctx = ExecutionContext::new();

    capture_exception(&mut engine, &mut ctx, Value::Smi(3));

    assert_eq!(engine.error_values_created, 0);
    assert_eq!(stored_report(&ctx).message, "Uncaught [number]");
}

#[test]
fn test_terminating_capture_with_empty_value() {
    let mut engine = MockEngine::default();
    let mut ctx = ExecutionContext::new();
    ctx.terminate();

    capture_exception(&mut engine, &mut ctx, Value::Undefined);

    assert_eq!(stored_report(&ctx).message, "execution terminated");
    assert_eq!(engine.error_values_created, 1);
    assert!(ctx.is_terminating(), "signal must be re-armed on return");
}

#[test]
fn test_terminating_capture_keeps_real_value() {
    let mut engine = MockEngine::default();
    let mut ctx = ExecutionContext::new();
    ctx.terminate();

    capture_exception(&mut engine, &mut ctx, Value::String("original".to_string()));

    assert_eq!(stored_report(&ctx).message, "original");
    assert_eq!(engine.error_values_created, 0);
    assert!(ctx.is_terminating());
}

#[test]
fn test_signal_is_cleared_during_nested_capture() {
    let mut engine = MockEngine::default();
    let mut ctx = ExecutionContext::new();
    ctx.terminate();

    capture_exception(&mut engine, &mut ctx, Value::Undefined);

    // the engine ran with the signal suspended, exactly once
    assert_eq!(engine.diagnosed_while_terminating, vec![false]);
}

#[test]
fn test_capture_diagnoses_exactly_once() {
    let mut engine = MockEngine::default();
    let mut ctx = ExecutionContext::new();
    ctx.terminate();

    capture_exception(&mut engine, &mut ctx, Value::Null);

    assert_eq!(engine.diagnosed_while_terminating.len(), 1);
}

#[test]
fn test_capture_diagnostic_direct_path() {
    let mut engine = MockEngine::default();
    let mut ctx = ExecutionContext::new();
    let diagnostic = Diagnostic::new("syntax trouble", "app.js").with_location(2, 1, 4);

    capture_diagnostic(&mut engine, &mut ctx, &diagnostic);

    let report = stored_report(&ctx);
    assert_eq!(report.message, "syntax trouble");
    assert_eq!(report.line_number, Some(2));
    // the engine is not consulted when a diagnostic is handed over directly
    assert!(engine.diagnosed_while_terminating.is_empty());
}

#[test]
fn test_capture_diagnostic_while_terminating_discards_it() {
    let mut engine = MockEngine::default();
    let mut ctx = ExecutionContext::new();
    ctx.terminate();
    let diagnostic = Diagnostic::new("stale message", "app.js");

    capture_diagnostic(&mut engine, &mut ctx, &diagnostic);

    assert_eq!(stored_report(&ctx).message, "execution terminated");
    assert!(ctx.is_terminating());
}

#[test]
fn test_encode_exception_does_not_store() {
    let mut engine = MockEngine::default();
    let ctx = ExecutionContext::new();

    let report = encode_exception(&mut engine, &ctx, &Value::String("boom".to_string()));

    assert_eq!(report.message, "boom");
    assert!(ctx.last_report().is_none());
}

#[test]
fn test_second_capture_overwrites_first() {
    let mut engine = MockEngine::default();
    let mut ctx = ExecutionContext::new();

    capture_exception(&mut engine, &mut ctx, Value::String("first".to_string()));
    capture_exception(&mut engine, &mut ctx, Value::String("second".to_string()));

    assert_eq!(stored_report(&ctx).message, "second");
}

#[test]
fn test_pause_restores_signal_on_panic() {
    let flag = Arc::new(TerminationFlag::new());
    flag.raise();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _pause = TerminationPause::new(Arc::clone(&flag));
        assert!(!flag.is_raised());
        panic!("nested capture failed");
    }));

    assert!(result.is_err());
    assert!(flag.is_raised(), "signal must be restored on unwind");
}

#[test]
fn test_capture_restores_signal_when_engine_panics() {
    struct PanickingEngine;

    impl Engine for PanickingEngine {
        fn create_diagnostic(&mut self, _ctx: &ExecutionContext, _thrown: &Value) -> Diagnostic {
            panic!("engine refused");
        }

        fn error_value(&mut self, message: &str) -> Value {
            Value::String(message.to_string())
        }
    }

    let mut engine = PanickingEngine;
    let mut ctx = ExecutionContext::new();
    ctx.terminate();

    let result = catch_unwind(AssertUnwindSafe(|| {
        capture_exception(&mut engine, &mut ctx, Value::Undefined);
    }));

    assert!(result.is_err());
    assert!(ctx.is_terminating(), "signal must survive a failed capture");
}
