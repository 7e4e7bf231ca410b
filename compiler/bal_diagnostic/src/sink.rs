use crate::Diagnostic;

/// Destination for diagnostics produced by a checking pass.
///
/// Emitting never fails; a sink may filter or reorder what it keeps.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Collects every diagnostic in emission order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}
