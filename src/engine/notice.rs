//! The notification channel between the engine and its front end.

use super::error::CalcError;
use crate::core::format_number;
use serde::Serialize;
use std::fmt;

/// Latest outcome worth showing next to the display.
///
/// A successful evaluation posts its result; a rejected operation posts its
/// error. Each new notice replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Notice {
    Result(f64),
    #[serde(serialize_with = "serialize_error")]
    Error(CalcError),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Result(value) => write!(f, "Result: {}", format_number(*value)),
            Self::Error(err) => write!(f, "Error: {err}"),
        }
    }
}

fn serialize_error<S: serde::Serializer>(
    err: &CalcError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_notice_formats_number() {
        assert_eq!(Notice::Result(9.0).to_string(), "Result: 9");
        assert_eq!(Notice::Result(0.5).to_string(), "Result: 0.5");
    }

    #[test]
    fn error_notice_carries_message() {
        let notice = Notice::Error(CalcError::DivisionByZero);
        assert!(notice.is_error());
        assert_eq!(notice.to_string(), "Error: Cannot divide by zero");
    }

    #[test]
    fn notice_serializes_with_tag() {
        let json = serde_json::to_string(&Notice::Error(CalcError::MissingOperand)).unwrap();
        assert_eq!(json, r#"{"kind":"error","value":"Enter a number first"}"#);

        let json = serde_json::to_string(&Notice::Result(27.0)).unwrap();
        assert_eq!(json, r#"{"kind":"result","value":27.0}"#);
    }
}
