//! Engine diagnostics and call-stack frames.
//!
//! This module provides the types the engine fills in when script execution
//! fails: one `Diagnostic` per reported problem, with an optional ordered
//! call stack of `StackFrame`s.

/// Script name used for frames whose origin the engine cannot supply.
pub const UNKNOWN_SCRIPT: &str = "<unknown>";

/// Severity constants for [`Diagnostic::error_level`].
///
/// Mirrors the engine's message levels; levels may be combined as a bitmask
/// by embedders, so the field stays a plain integer.
pub mod error_level {
    /// console.log level output
    pub const LOG: i32 = 1;
    /// Debug-level output
    pub const DEBUG: i32 = 2;
    /// Informational output
    pub const INFO: i32 = 4;
    /// Uncaught errors
    pub const ERROR: i32 = 8;
    /// Warnings
    pub const WARNING: i32 = 16;
}

/// Engine-produced description of one error.
///
/// Mandatory fields are always supplied by the engine. The optional fields
/// are absent for synthetic or native call sites that have no source text
/// backing them.
///
/// # Examples
///
/// ```
/// use core_types::{error_level, Diagnostic};
///
/// let diagnostic = Diagnostic::new("Uncaught TypeError: x is not a function", "app.js");
/// assert_eq!(diagnostic.error_level, error_level::ERROR);
/// assert!(diagnostic.source_line.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Human-readable error message
    pub message: String,
    /// Script identifier the error originated in
    pub resource_name: String,
    /// Byte offset where the offending range starts
    pub start_position: u32,
    /// Byte offset where the offending range ends
    pub end_position: u32,
    /// Severity, see [`error_level`]
    pub error_level: i32,
    /// Whether the script is shared across origins
    pub is_shared_cross_origin: bool,
    /// Whether the script origin is opaque to the embedder
    pub is_opaque: bool,
    /// Text of the offending source line, if available
    pub source_line: Option<String>,
    /// 1-based line number, if available
    pub line_number: Option<u32>,
    /// Column where the offending range starts, if available
    pub start_column: Option<u32>,
    /// Column where the offending range ends, if available
    pub end_column: Option<u32>,
    /// Call stack at the time of the error, outermost to innermost as
    /// produced by the engine; possibly empty
    pub frames: Vec<StackFrame>,
}

impl Diagnostic {
    /// Create a diagnostic with the mandatory fields and no location detail.
    ///
    /// Severity defaults to [`error_level::ERROR`]; positions default to 0.
    pub fn new(message: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            resource_name: resource_name.into(),
            start_position: 0,
            end_position: 0,
            error_level: error_level::ERROR,
            is_shared_cross_origin: false,
            is_opaque: false,
            source_line: None,
            line_number: None,
            start_column: None,
            end_column: None,
            frames: Vec::new(),
        }
    }

    /// Attach the offending source line text.
    pub fn with_source_line(mut self, line: impl Into<String>) -> Self {
        self.source_line = Some(line.into());
        self
    }

    /// Attach line and column information.
    pub fn with_location(mut self, line_number: u32, start_column: u32, end_column: u32) -> Self {
        self.line_number = Some(line_number);
        self.start_column = Some(start_column);
        self.end_column = Some(end_column);
        self
    }

    /// Attach a call stack.
    pub fn with_frames(mut self, frames: Vec<StackFrame>) -> Self {
        self.frames = frames;
        self
    }
}

/// Represents a single frame in a script call stack.
///
/// # Examples
///
/// ```
/// use core_types::{StackFrame, UNKNOWN_SCRIPT};
///
/// let frame = StackFrame::new(25, 10);
/// assert_eq!(frame.script_name, UNKNOWN_SCRIPT);
/// assert!(frame.function_name.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Line number where the call occurred
    pub line: u32,
    /// Column number where the call occurred
    pub column: u32,
    /// Name of the function; empty for anonymous functions
    pub function_name: String,
    /// Script name or source URL; [`UNKNOWN_SCRIPT`] when unavailable
    pub script_name: String,
    /// Whether the frame originates from an eval call
    pub is_eval: bool,
    /// Whether the frame is a constructor invocation
    pub is_constructor: bool,
    /// Whether the frame executes WebAssembly
    pub is_wasm: bool,
}

impl StackFrame {
    /// Create a frame at a position with no name information.
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            function_name: String::new(),
            script_name: UNKNOWN_SCRIPT.to_string(),
            is_eval: false,
            is_constructor: false,
            is_wasm: false,
        }
    }

    /// Set the function name.
    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    /// Set the script name or source URL.
    pub fn with_script_name(mut self, name: impl Into<String>) -> Self {
        self.script_name = name.into();
        self
    }
}
