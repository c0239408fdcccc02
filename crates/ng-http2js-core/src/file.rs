//! Input file records fed to the pipeline
//!
//! A file is either empty (`Null`), fully read into memory (`Buffer`) or an
//! unbounded reader (`Stream`). Only buffered files produce cache entries.

use std::fmt;
use std::io::Read;

pub enum FileContents {
    Null,
    Buffer(Vec<u8>),
    Stream(Box<dyn Read + Send>),
}

impl fmt::Debug for FileContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContents::Null => f.write_str("Null"),
            FileContents::Buffer(bytes) => f.debug_tuple("Buffer").field(&bytes.len()).finish(),
            FileContents::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// One source file as handed over by the host build
#[derive(Debug)]
pub struct InputFile {
    pub path: String,
    pub contents: FileContents,
}

impl InputFile {
    pub fn new(path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: FileContents::Buffer(contents.into()),
        }
    }

    pub fn null(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: FileContents::Null,
        }
    }

    pub fn stream<R>(path: impl Into<String>, reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            path: path.into(),
            contents: FileContents::Stream(Box::new(reader)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.contents, FileContents::Null)
    }

    pub fn is_stream(&self) -> bool {
        matches!(self.contents, FileContents::Stream(_))
    }

    pub fn is_buffer(&self) -> bool {
        matches!(self.contents, FileContents::Buffer(_))
    }

    /// Buffered contents decoded as text; invalid UTF-8 is replaced
    pub fn text(&self) -> Option<String> {
        match &self.contents {
            FileContents::Buffer(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }
}

impl<P, C> From<(P, C)> for InputFile
where
    P: Into<String>,
    C: Into<Vec<u8>>,
{
    fn from((path, contents): (P, C)) -> Self {
        InputFile::new(path, contents)
    }
}

/// A bare string is taken as file contents with an empty path
impl From<String> for InputFile {
    fn from(contents: String) -> Self {
        InputFile::new(String::new(), contents)
    }
}

impl From<&str> for InputFile {
    fn from(contents: &str) -> Self {
        InputFile::new(String::new(), contents)
    }
}
