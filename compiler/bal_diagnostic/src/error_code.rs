use std::fmt;

/// Error codes for semantic diagnostics.
///
/// Format: E#### for errors, W#### for warnings. The first digit indicates the phase:
/// - E2xxx: Type errors
/// - E9xxx: Internal / driver errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Type Errors (E2xxx)
    /// Incompatible types (expected, found)
    E2001,
    /// Cast not defined between two types
    E2002,
    /// Conversion not defined between two types
    E2003,
    /// Struct cannot constrain a json type
    E2005,
    /// Incompatible argument type (expected, found)
    E2006,
    /// Incompatible return type (expected, found)
    E2007,

    // Internal Errors (E9xxx)
    /// Too many errors
    E9002,

    // Type Warnings (W2xxx)
    /// Cast needs a run-time check
    W2001,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E2001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E9002 => "E9002",
            ErrorCode::W2001 => "W2001",
        }
    }

    /// Message template; `{0}`, `{1}`, ... are replaced by the diagnostic's arguments.
    pub fn template(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "incompatible types: expected '{0}', found '{1}'",
            ErrorCode::E2002 => "incompatible types: '{0}' cannot be cast to '{1}'",
            ErrorCode::E2003 => "incompatible types: '{0}' cannot be converted to '{1}'",
            ErrorCode::E2005 => "incompatible types: '{0}' cannot be used as a json constraint",
            ErrorCode::E2006 => "incompatible argument type: expected '{0}', found '{1}'",
            ErrorCode::E2007 => "incompatible return type: expected '{0}', found '{1}'",
            ErrorCode::E9002 => "aborting due to {0} previous errors",
            ErrorCode::W2001 => "unsafe cast from '{0}' to '{1}' is checked at run time",
        }
    }

    /// Render the template with positional arguments.
    ///
    /// Placeholders without a matching argument are left as written.
    pub fn render(&self, args: &[String]) -> String {
        let mut message = self.template().to_owned();
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{i}}}"), arg);
        }
        message
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
