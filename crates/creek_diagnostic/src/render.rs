use std::io;

use termcolor::{ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use super::sources::{Source, SourceMap};
use super::{Config, Diagnostic, Severity, Snippet, SnippetKind};

const TAB: &str = "    ";

impl<S: SourceMap> Diagnostic<S> {
    pub fn write_to_stream(
        &self,
        sources: &S,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        DiagnosticWriter {
            diagnostic: self,
            sources,
            stream,
            config,
        }
        .draw_all()
    }
}

struct DiagnosticWriter<'stream, 'a, W: WriteColor, S: SourceMap> {
    diagnostic: &'a Diagnostic<S>,
    sources: &'a S,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<'a, W: WriteColor, S: SourceMap> DiagnosticWriter<'_, 'a, W, S> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        for snippet in &self.diagnostic.snippets {
            self.draw_snippet(snippet)?;
        }

        if self.diagnostic.snippets.is_empty() {
            writeln!(self.stream)?;
        }

        Ok(())
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream.set_color(self.primary_color())?;

        let kind_str = match self.diagnostic.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(self.stream, "{kind_str}:")?;

        self.stream.reset()?;

        match &self.diagnostic.message {
            Some(message) => writeln!(self.stream, " {message}")?,
            None => writeln!(self.stream)?,
        }

        Ok(())
    }

    /// Draws the snippet's source line with a caret underline beneath the
    /// spanned bytes. Spans past the end of the line (such as an
    /// end-of-input position) underline the column just after it.
    fn draw_snippet(&mut self, snippet: &Snippet<S>) -> io::Result<()> {
        let source = self
            .sources
            .get_source(snippet.source_id)
            .expect("source missing");

        let span = snippet.span;

        let (line_num, col_num) = source
            .byte_to_line_col(span.start)
            .expect("position out of bounds");
        let line_index = line_num - 1;

        self.stream.set_color(&self.config.subtle)?;
        writeln!(self.stream, "In {}:{line_num}:{col_num}", source.name_str())?;
        self.stream.reset()?;

        let line_num_width = 1 + line_num.ilog10() as usize;

        let raw_line = source.line_str(line_index).expect("line out of bounds");
        let line_start = source.line_to_byte(line_index).expect("line out of bounds");
        let line_end = line_start + raw_line.len();

        self.draw_gutter(Some(line_num), line_num_width)?;
        writeln!(self.stream, "{}", raw_line.replace('\t', TAB))?;

        self.draw_gutter(None, line_num_width)?;

        let before = &source.source_str()[line_start..span.start];
        let offset = str_width(before);

        let spanned = &source.source_str()[span.start..span.end.clamp(span.start, line_end)];
        let underline_len = str_width(spanned).max(1);

        self.stream.set_color(self.snippet_color(snippet.kind))?;

        write!(self.stream, "{:<offset$}", "")?;
        for _ in 0..underline_len {
            write!(self.stream, "{}", self.config.underline)?;
        }

        writeln!(
            self.stream,
            "{}{}",
            self.config.underline_after, snippet.label
        )?;

        self.stream.reset()?;

        Ok(())
    }

    fn draw_gutter(&mut self, line: Option<usize>, line_num_width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.subtle)?;

        if let Some(line) = line {
            write!(self.stream, "{line:>width$}", width = line_num_width)?;
        } else {
            write!(self.stream, "{:>width$}", "", width = line_num_width)?;
        }

        write!(self.stream, " {} ", self.config.gutter)?;

        self.stream.reset()?;

        Ok(())
    }

    fn primary_color(&self) -> &'a ColorSpec {
        match self.diagnostic.severity {
            Severity::Warning => &self.config.warning_color,
            Severity::Error => &self.config.error_color,
        }
    }

    fn snippet_color(&self, kind: SnippetKind) -> &'a ColorSpec {
        match kind {
            SnippetKind::Primary => self.primary_color(),
            SnippetKind::Secondary => &self.config.emphasis,
        }
    }
}

fn str_width(s: &str) -> usize {
    let num_tabs = s.chars().filter(|&ch| ch == '\t').count();
    s.width() + num_tabs * TAB.len()
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use crate::sources::Cached;
    use crate::{Config, Diagnostic, Snippet};

    fn diagnostic_to_string(
        diagnostic: Diagnostic<Vec<Cached<(String, String)>>>,
        source: &str,
    ) -> String {
        let sources = vec![Cached::new(("sample".to_owned(), source.to_owned()))];

        let config = Config::default();
        let mut stream = NoColor::new(vec![]);

        diagnostic
            .write_to_stream(&sources, &config, &mut stream)
            .unwrap();

        String::from_utf8(stream.into_inner()).unwrap()
    }

    #[test]
    fn caret_under_offending_byte() {
        let diagnostic = Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::primary("unexpected character '@'", 0, 1..2));

        let s = diagnostic_to_string(diagnostic, "1@2");

        assert!(s.starts_with("error: syntax error\n"));
        assert!(s.contains("1 │ 1@2\n"));
        assert!(s.contains("  │  ^  unexpected character '@'\n"));
    }

    #[test]
    fn caret_at_end_of_input() {
        let diagnostic = Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::primary("expected an expression", 0, 2..2));

        let s = diagnostic_to_string(diagnostic, "1+");

        assert!(s.contains("1 │ 1+\n"));
        assert!(s.contains("  │   ^  expected an expression\n"));
    }
}
