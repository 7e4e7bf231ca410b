use bal_diagnostic::ErrorCode;

/// Checker-level policy.
///
/// Assignability rules are fixed by the language; this only controls how
/// results are reported.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CheckerConfig {
    /// Warn when `resolve_cast` accepts a cast that is checked at run time.
    pub unsafe_cast_warnings: bool,
    /// Code reported when no cast operator exists.
    pub cast_code: ErrorCode,
    /// Code reported when no conversion operator exists.
    pub conversion_code: ErrorCode,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            unsafe_cast_warnings: false,
            cast_code: ErrorCode::E2002,
            conversion_code: ErrorCode::E2003,
        }
    }
}

impl CheckerConfig {
    #[must_use]
    pub fn with_unsafe_cast_warnings(mut self, enabled: bool) -> Self {
        self.unsafe_cast_warnings = enabled;
        self
    }

    #[must_use]
    pub fn with_cast_code(mut self, code: ErrorCode) -> Self {
        self.cast_code = code;
        self
    }

    #[must_use]
    pub fn with_conversion_code(mut self, code: ErrorCode) -> Self {
        self.conversion_code = code;
        self
    }
}
