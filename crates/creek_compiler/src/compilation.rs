use creek_backend::CodeGenerator;
use creek_session::diagnostics::DiagnosticEmitter;
use creek_session::sourcemap::Source;
use creek_session::{ErrorsEmitted, Session};

/// Runs the whole pipeline on one expression: lex, parse, generate. The
/// first failing stage reports its diagnostic and aborts the compilation.
pub fn compile<D: DiagnosticEmitter>(
    session: &mut Session<D>,
    name: &str,
    source: &str,
) -> Result<String, ErrorsEmitted> {
    let source_id = session.sources.insert(Source::new(name, source));

    let tokens = match creek_frontend::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => return Err(session.report(err, &source_id)),
    };

    let expr = match creek_frontend::parse(tokens) {
        Ok(expr) => expr,
        Err(err) => return Err(session.report(err, &source_id)),
    };

    Ok(CodeGenerator::new().run(&expr))
}
