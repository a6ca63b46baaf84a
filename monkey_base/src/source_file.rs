//! Contains the code related to the source code input: [`SourceFile`], [`Span`] and
//! [`Location`].

use std::{
    fmt::{Debug, Display},
    fs::File,
    ops::Range,
    path::{Path, PathBuf},
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    text: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // zero-length files cannot be mapped
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        MappedSourceTryBuilder {
            file,
            mapped,
            text_builder: |mapped| {
                mapped
                    .as_deref()
                    .map_or(Ok(""), |bytes| std::str::from_utf8(bytes).map_err(Error::from))
            },
        }
        .try_build()
    }
}

/// The storage backing the text of a [`SourceFile`].
enum Text {
    Mapped(MappedSource),
    Owned(String),
}

impl Text {
    fn as_str(&self) -> &str {
        match self {
            Self::Mapped(mapped) => mapped.borrow_text(),
            Self::Owned(string) => string,
        }
    }
}

/// Represents a source text fed to the toolchain, either a file on disk or an in-memory string
/// such as a line typed into the REPL.
#[derive(Getters)]
pub struct SourceFile {
    text: Text,

    /// Gets the path (or display name) of the source file.
    #[get = "pub"]
    path: PathBuf,

    lines: Vec<Range<ByteIndex>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl SourceFile {
    fn new(path: PathBuf, text: Text) -> Arc<Self> {
        let lines = line_ranges(text.as_str());
        Arc::new(Self { text, path, lines })
    }

    /// Loads the source file by mapping the given file into memory.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: The file content is not valid UTF-8.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        Ok(Self::new(path, Text::Mapped(MappedSource::create(file)?)))
    }

    /// Opens and loads the source file at the given path.
    ///
    /// # Errors
    /// See [`SourceFile::load`].
    pub fn open(path: impl AsRef<Path>) -> Result<Arc<Self>, Error> {
        let path = path.as_ref();
        Self::load(File::open(path)?, path.to_path_buf())
    }

    /// Creates a source file from an in-memory string, using `name` as its display path.
    #[must_use]
    pub fn from_string(name: impl Into<PathBuf>, content: String) -> Arc<Self> {
        Self::new(name.into(), Text::Owned(content))
    }

    /// Creates a temporary source file on disk and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating, writing to, or mapping the file.
    /// - [`Error::Utf8Error`]: The written content is not valid UTF-8.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("monkey")
            .suffix(".mk")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.text.as_str() }

    /// Gets the line of the source file at the given line number, including its line terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        let range = self.lines.get(line.checked_sub(1)?)?;
        Some(&self.content()[range.clone()])
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Gets the [`Location`] of the given byte index.
    ///
    /// The end of the content is a valid index; it is located past the last character of the
    /// last line.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        self.content()
            .is_char_boundary(byte_index)
            .then(|| self.location(byte_index))
    }

    // `byte_index` must be a char boundary of the content.
    fn location(&self, byte_index: ByteIndex) -> Location {
        // `lines` always holds at least one (possibly empty) range
        let line = self
            .lines
            .partition_point(|range| range.end <= byte_index)
            .min(self.lines.len() - 1);

        let line_start = self.lines[line].start;
        let column = self.content()[line_start..byte_index].chars().count() + 1;

        Location {
            line: line + 1,
            column,
        }
    }
}

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location, counted in characters (starts at 1).
    pub column: usize,
}

/// Represents a range of characters in a source file.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        Arc::as_ptr(&self.source_file).hash(state);
    }
}

impl Span {
    /// Creates a span from the given start and end byte indices in the source file.
    ///
    /// Returns [`None`] if the range is reversed, out of bounds, or does not lie on character
    /// boundaries.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        let content = source_file.content();

        if start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Creates a span from the given start byte index to the end of the source file.
    #[must_use]
    pub fn to_end(source_file: Arc<SourceFile>, start: ByteIndex) -> Option<Self> {
        let end = source_file.content().len();
        Self::new(source_file, start, end)
    }

    /// Gets the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.content()[self.start..self.end] }

    /// Gets the starting [`Location`] of the span.
    #[must_use]
    pub fn start_location(&self) -> Location { self.source_file.location(self.start) }

    /// Gets the ending [`Location`] of the span (exclusive).
    #[must_use]
    pub fn end_location(&self) -> Location { self.source_file.location(self.end) }
}

/// Represents an element that is located within a source file.
pub trait SourceElement {
    /// Gets the span location of the element.
    fn span(&self) -> Span;
}

/// Splits the text into the byte ranges of its lines. `\n`, `\r\n` and a lone `\r` all end a
/// line and belong to the line they end.
fn line_ranges(text: &str) -> Vec<Range<ByteIndex>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut line_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        let terminator_len = match (bytes[index], bytes.get(index + 1)) {
            (b'\r', Some(b'\n')) => 2,
            (b'\r' | b'\n', _) => 1,
            _ => {
                index += 1;
                continue;
            }
        };

        index += terminator_len;
        ranges.push(line_start..index);
        line_start = index;
    }

    ranges.push(line_start..text.len());
    ranges
}
