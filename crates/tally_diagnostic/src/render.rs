use std::io;

use termcolor::{ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use super::sources::{Cached, Source, Sources};
use super::{Config, Diagnostic, Severity, SnippetKind};
use crate::span::Span;

const TAB: &str = "    ";

impl<S: Sources> Diagnostic<S> {
    /// Renders the diagnostic, quoting the annotated source lines.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] if a snippet refers to a
    /// source or position that `sources` doesn't contain.
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

struct DiagnosticWriter<'stream, 'a, W: WriteColor, S: Sources> {
    diagnostic: &'a Diagnostic<S>,
    sources: &'a S,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<'a, W: WriteColor, S: Sources> DiagnosticWriter<'_, 'a, W, S> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        for source_data in self.snippets_by_source()? {
            let num_lines = source_data.source.num_lines();
            let context_size = self.config.context_size;

            let groups = get_overlapping_groups(source_data.snippets, |s| {
                Span::new(
                    s.line.saturating_sub(context_size),
                    (s.line + 1 + context_size).min(num_lines),
                )
            });

            for (snippets, lines) in groups {
                self.draw_group(source_data.source, &snippets, lines)?;
            }
        }

        Ok(())
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream.set_color(self.get_primary_color())?;
        write!(self.stream, "{}:", self.diagnostic.severity.as_str())?;
        self.stream.reset()?;

        match &self.diagnostic.message {
            Some(message) => writeln!(self.stream, " {message}"),
            None => writeln!(self.stream),
        }
    }

    fn draw_group(
        &mut self,
        source: &Cached<S::Source>,
        snippets: &[SnippetData],
        lines: Span,
    ) -> io::Result<()> {
        let line_num_width = 1 + lines.end.max(1).ilog10() as usize;

        // groups are never empty
        let (line_num, col_num) = source
            .byte_to_line_col(snippets[0].bytes.start)
            .ok_or_else(out_of_bounds)?;

        self.stream.set_color(&self.config.subtle)?;
        write!(self.stream, "In {}:{line_num}:{col_num}", source.name_str())?;
        if let Some(path) = source.path() {
            write!(self.stream, " ({}:{line_num}:{col_num})", path.display())?;
        }
        writeln!(self.stream)?;
        self.stream.reset()?;

        for line in lines {
            let line_str = source.line_str(line).ok_or_else(out_of_bounds)?;
            let line_start = source.line_to_byte(line).ok_or_else(out_of_bounds)?;

            self.draw_gutter(Some(line + 1), line_num_width)?;
            writeln!(self.stream, "{}", line_str.replace('\t', TAB))?;

            for snippet in snippets.iter().filter(|s| s.line == line) {
                // snippets spanning several lines are underlined up to the line end
                let line_end = line_start + line_str.len();
                let start = snippet.bytes.start.min(line_end);
                let end = snippet.bytes.end.clamp(start, line_end);

                let offset = str_width(&line_str[..start - line_start]);
                let width = str_width(&line_str[start - line_start..end - line_start]).max(1);

                self.draw_gutter(None, line_num_width)?;

                self.stream
                    .set_color(self.get_snippet_color(snippet.kind))?;
                write!(self.stream, "{:<offset$}", "")?;
                write!(self.stream, "{}", self.config.underline.repeat(width))?;
                write!(self.stream, "{}{}", self.config.underline_after, snippet.label)?;
                self.stream.reset()?;

                writeln!(self.stream)?;
            }
        }

        writeln!(self.stream)?;

        Ok(())
    }

    fn draw_gutter(&mut self, line: Option<usize>, line_num_width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.subtle)?;

        match line {
            Some(line) => write!(self.stream, "{line:>line_num_width$}")?,
            None => write!(self.stream, "{:>line_num_width$}", "")?,
        }

        write!(self.stream, " {} ", self.config.gutter)?;

        self.stream.reset()
    }

    fn snippets_by_source(&self) -> io::Result<Vec<SourceData<'a, S>>> {
        let mut source_datas: Vec<SourceData<'a, S>> = vec![];

        for snippet in &self.diagnostic.snippets {
            let index = match source_datas
                .iter()
                .position(|data| data.source_id == snippet.source_id)
            {
                Some(index) => index,
                None => {
                    let source = self
                        .sources
                        .get_source(snippet.source_id)
                        .ok_or_else(out_of_bounds)?;

                    source_datas.push(SourceData {
                        source_id: snippet.source_id,
                        source,
                        snippets: vec![],
                    });
                    source_datas.len() - 1
                }
            };

            let source_data = &mut source_datas[index];

            let line = source_data
                .source
                .byte_to_line_index(snippet.span.start)
                .ok_or_else(out_of_bounds)?;

            source_data.snippets.push(SnippetData {
                label: &snippet.label,
                kind: snippet.kind,

                bytes: snippet.span,
                line,
            });
        }

        Ok(source_datas)
    }

    fn get_primary_color(&self) -> &'a ColorSpec {
        match self.diagnostic.severity {
            Severity::Warning => &self.config.warning_color,
            Severity::Error => &self.config.error_color,
        }
    }

    fn get_snippet_color(&self, kind: SnippetKind) -> &'a ColorSpec {
        match kind {
            SnippetKind::Primary => self.get_primary_color(),
            SnippetKind::Secondary => &self.config.emphasis,
        }
    }
}

struct SourceData<'a, S: Sources> {
    source_id: S::SourceId,
    source: &'a Cached<S::Source>,
    snippets: Vec<SnippetData<'a>>,
}

#[derive(Clone)]
struct SnippetData<'a> {
    label: &'a str,
    kind: SnippetKind,

    bytes: Span,
    line: usize,
}

/// Sorts `items` by range start and merges those whose ranges overlap or touch.
fn get_overlapping_groups<T, F>(mut items: Vec<T>, get_range: F) -> Vec<(Vec<T>, Span)>
where
    F: Fn(&T) -> Span,
{
    items.sort_by_key(|item| get_range(item).start);

    let mut groups = vec![];

    let mut group = vec![];
    let mut group_range = Span::default();

    for item in items {
        let range = get_range(&item);

        if range.start > group_range.end && !group.is_empty() {
            groups.push((std::mem::take(&mut group), group_range));
        }

        group_range = if group.is_empty() {
            range
        } else {
            group_range.union(range)
        };

        group.push(item);
    }

    if !group.is_empty() {
        groups.push((group, group_range));
    }

    groups
}

fn str_width(s: &str) -> usize {
    let num_tabs = s.chars().filter(|&ch| ch == '\t').count();
    s.width() + num_tabs * TAB.len()
}

fn out_of_bounds() -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        "diagnostic snippet out of bounds",
    )
}
