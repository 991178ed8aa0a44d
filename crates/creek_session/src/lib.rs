pub mod diagnostics;
pub mod sourcemap;

use diagnostics::{DiagnosticEmitter, IntoDiagnostic};
use sourcemap::SourceMap;

/// Witness that at least one error diagnostic has been emitted. The
/// pipeline is fail-fast, so holding one means compilation is over.
#[derive(Debug, Clone, Copy)]
pub struct ErrorsEmitted;

/// State shared by all stages of a compilation: the sources being compiled
/// and the sink that diagnostics are reported to.
pub struct Session<D: DiagnosticEmitter> {
    pub sources: SourceMap,
    pub diagnostics: D,
}

impl<D: DiagnosticEmitter> Session<D> {
    pub fn new(diagnostics: D) -> Self {
        Self {
            sources: SourceMap::default(),
            diagnostics,
        }
    }

    pub fn report<Context>(
        &mut self,
        diagnostic: impl IntoDiagnostic<Context>,
        cx: &Context,
    ) -> ErrorsEmitted {
        let diagnostic = diagnostic.into_diagnostic(cx);
        self.diagnostics.emit_diagnostic(diagnostic, &self.sources);
        ErrorsEmitted
    }
}
