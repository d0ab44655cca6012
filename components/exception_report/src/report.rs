//! Typed error report schema and the diagnostic encoder.
//!
//! A [`Diagnostic`] is encoded into an [`ErrorReport`], whose serialized
//! form is the JSON document the host runtime parses back into a structured
//! error. Serde handles escaping for the full JSON control set on every
//! string field, and optional fields are omitted entirely rather than
//! written as `null`.

use core_types::{Diagnostic, StackFrame};
use serde::{Deserialize, Serialize};

/// Structured error report with the fixed schema read by the host runtime.
///
/// Field order here is the key order of the serialized document. The eight
/// mandatory fields are always present; the optional location fields appear
/// only when the source diagnostic carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    /// Error message text
    pub message: String,
    /// Script identifier the error originated in
    pub script_resource_name: String,
    /// Byte offset where the offending range starts
    pub start_position: u32,
    /// Byte offset where the offending range ends
    pub end_position: u32,
    /// Severity level as reported by the engine
    pub error_level: i32,
    /// Whether the script is shared across origins
    pub is_shared_cross_origin: bool,
    /// Whether the script origin is opaque to the embedder
    pub is_opaque: bool,
    /// Text of the offending source line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_line: Option<String>,
    /// 1-based line number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    /// Column where the offending range starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_column: Option<u32>,
    /// Column where the offending range ends
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,
    /// Call stack; never empty (a script-origin frame stands in when the
    /// engine produced no stack)
    pub frames: Vec<ReportFrame>,
}

/// One entry of the report's `frames` array.
///
/// Untagged: a call frame serializes as its seven fixed keys, a script
/// origin as its reduced set. Deserialization tries the call-frame shape
/// first, so full frames never collapse into the fallback shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportFrame {
    /// Frame taken from the engine-produced call stack
    Call(CallFrameReport),
    /// Fallback frame built from the script origin when no stack exists
    Origin(ScriptOriginReport),
}

/// Serialized form of one engine call-stack frame.
///
/// Always carries exactly these seven keys, in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFrameReport {
    /// Line number of the call site
    pub line: u32,
    /// Column number of the call site
    pub column: u32,
    /// Function name; empty for anonymous functions
    pub function_name: String,
    /// Script name or source URL; `"<unknown>"` when unavailable
    pub script_name: String,
    /// Whether the frame originates from an eval call
    pub is_eval: bool,
    /// Whether the frame is a constructor invocation
    pub is_constructor: bool,
    /// Whether the frame executes WebAssembly
    pub is_wasm: bool,
}

/// Fallback frame describing the script origin of a stackless diagnostic.
///
/// Line and column are present when the diagnostic carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOriginReport {
    /// Line number of the error site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Column of the error site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    /// Script identifier
    pub script_name: String,
}

impl ErrorReport {
    /// Encode a diagnostic into a report.
    ///
    /// Pure and deterministic: encoding the same diagnostic twice yields
    /// byte-identical JSON. A non-empty call stack maps frame-for-frame,
    /// preserving order; an empty one yields a single script-origin frame
    /// whose line and column are included when the diagnostic has them.
    pub fn from_diagnostic(diagnostic: &Diagnostic) -> Self {
        let frames = if diagnostic.frames.is_empty() {
            vec![ReportFrame::Origin(ScriptOriginReport {
                line: diagnostic.line_number,
                column: diagnostic.start_column,
                script_name: diagnostic.resource_name.clone(),
            })]
        } else {
            diagnostic.frames.iter().map(ReportFrame::from).collect()
        };

        Self {
            message: diagnostic.message.clone(),
            script_resource_name: diagnostic.resource_name.clone(),
            start_position: diagnostic.start_position,
            end_position: diagnostic.end_position,
            error_level: diagnostic.error_level,
            is_shared_cross_origin: diagnostic.is_shared_cross_origin,
            is_opaque: diagnostic.is_opaque,
            source_line: diagnostic.source_line.clone(),
            line_number: diagnostic.line_number,
            start_column: diagnostic.start_column,
            end_column: diagnostic.end_column,
            frames,
        }
    }

    /// Serialize the report to its JSON document form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a report back from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<&StackFrame> for ReportFrame {
    fn from(frame: &StackFrame) -> Self {
        ReportFrame::Call(CallFrameReport {
            line: frame.line,
            column: frame.column,
            function_name: frame.function_name.clone(),
            script_name: frame.script_name.clone(),
            is_eval: frame.is_eval,
            is_constructor: frame.is_constructor,
            is_wasm: frame.is_wasm,
        })
    }
}
