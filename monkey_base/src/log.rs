//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        };

        write!(
            f,
            "{} {}",
            Style::Bold.with(header),
            Style::Bold.with(&self.display)
        )
    }
}

fn digits(number: usize) -> usize { number.checked_ilog10().map_or(1, |log| log as usize + 1) }

/// Writes `line` with tabs expanded to four spaces and its line terminator removed.
fn write_line(f: &mut std::fmt::Formatter<'_>, line: &str) -> std::fmt::Result {
    for character in line.trim_end_matches(['\n', '\r']).chars() {
        if character == '\t' {
            f.write_str("    ")?;
        } else {
            write!(f, "{character}")?;
        }
    }

    Ok(())
}

/// Structure implementing [`Display`] that prints the line of source code a span starts on, with
/// the spanned characters marked underneath.
///
/// ```text
///   --> main.mk:1:5
///    |
///  1 | let @ = 5;
///    |     ^ help: this character is not part of the language
///    |
/// ```
///
/// Spans covering several lines are marked up to the end of their first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let start = self.span.start_location();
        let gutter = digits(start.line);
        let pipe = Style::Bold.with(Color::Cyan.with("|"));

        writeln!(
            f,
            "{:gutter$} {} {}:{}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.path().display(),
            start.line,
            start.column,
        )?;
        writeln!(f, "{:gutter$} {pipe}", "")?;

        let line = source_file.get_line(start.line).unwrap_or_default();
        write!(
            f,
            "{} {pipe} ",
            Style::Bold.with(Color::Cyan.with(format_args!("{:>gutter$}", start.line)))
        )?;
        write_line(f, line)?;
        writeln!(f)?;

        // the marker starts under the first spanned character, tabs widened as in `write_line`
        let width = |character: char| if character == '\t' { 4 } else { 1 };
        let before: usize = line.chars().take(start.column - 1).map(width).sum();
        let marked = self
            .span
            .str()
            .split(['\n', '\r'])
            .next()
            .unwrap_or_default()
            .chars()
            .map(width)
            .sum::<usize>()
            .max(1);

        write!(
            f,
            "{:gutter$} {pipe} {:before$}{}",
            "",
            "",
            Style::Bold.with(Color::Red.with("^".repeat(marked))),
        )?;

        if let Some(help) = &self.help_display {
            write!(f, " {}: {help}", Style::Bold.with("help"))?;
        }

        writeln!(f)?;
        writeln!(f, "{:gutter$} {pipe}", "")
    }
}
