use std::fs;
use std::io;
use std::path::Path;

use crate::domain::error::AppError;

/// A plain-text document treated as an ordered list of paragraphs.
///
/// On disk, paragraphs are blocks of text separated by blank lines. Line
/// breaks inside a block are preserved; leading and trailing whitespace
/// around a block is not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    paragraphs: Vec<String>,
}

impl Document {
    /// Parse raw text into paragraphs, splitting on blank lines.
    pub fn parse(content: &str) -> Self {
        let normalized = content.replace("\r\n", "\n");
        let paragraphs = normalized
            .split("\n\n")
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .map(str::to_string)
            .collect();
        Self { paragraphs }
    }

    /// Load a document from disk.
    ///
    /// A missing file maps to [`AppError::DocumentNotFound`] so callers can
    /// tell it apart from other I/O failures.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(AppError::DocumentNotFound(path.to_path_buf()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Write the document, separating paragraphs with blank lines.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        fs::write(path, format!("{}\n", self.paragraphs.join("\n\n")))?;
        Ok(())
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// All paragraph text joined with single newlines, for scanning.
    pub fn full_text(&self) -> String {
        self.paragraphs.join("\n")
    }

    /// Append `suffix` to every paragraph matching `predicate`.
    ///
    /// Returns how many paragraphs were amended.
    pub fn append_where<F>(&mut self, predicate: F, suffix: &str) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let mut amended = 0;
        for paragraph in &mut self.paragraphs {
            if predicate(paragraph) {
                paragraph.push_str(suffix);
                amended += 1;
            }
        }
        amended
    }
}
