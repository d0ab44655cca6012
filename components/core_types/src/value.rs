//! Tagged representation of script values.
//!
//! This module provides the `Value` enum covering the values script code can
//! throw. Thrown values are not guaranteed to be Error-shaped objects; any
//! primitive can reach the exception capture path.

/// Represents any value script code can throw.
///
/// Primitive values are stored inline. The exception capture path only needs
/// enough structure to classify a thrown value and hand it to the engine for
/// diagnosis, so object-shaped values are out of scope here.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
///
/// assert!(undefined.is_null_or_undefined());
/// assert!(number.is_truthy());
/// assert_eq!(number.type_of(), "number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The undefined value
    Undefined,
    /// The null value
    Null,
    /// Boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits, tagged representation)
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// String value
    String(String),
}

impl Value {
    /// Check whether this value is null or undefined.
    ///
    /// The termination guard uses this to decide whether a synthetic error
    /// value must be created in place of the thrown one.
    pub fn is_null_or_undefined(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Check if the value is truthy under script semantics.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
        }
    }

    /// Get the `typeof` string for this value.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
        }
    }
}
