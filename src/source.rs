//! Loading and validating source files from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use canonical::Language;
use thiserror::Error;

/// Extensions accepted for comparison. Files outside the tokenizer's
/// language table (`php`, `rb`, `go`) are tokenized with the `Unknown`
/// profile.
pub const ACCEPTED_EXTENSIONS: [&str; 9] =
    ["py", "js", "java", "cpp", "c", "cs", "php", "rb", "go"];

/// Reasons a path cannot take part in a comparison.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("unsupported extension: {0}")]
    UnsupportedExtension(PathBuf),
    #[error("file is empty: {0}")]
    Empty(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Raw source text plus the language tag derived from its extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Identifier used in results; the path as given for files on disk.
    pub path: String,
    pub language: Language,
    pub text: String,
}

impl SourceFile {
    /// Reads and validates `path`.
    ///
    /// Checks, in order: existence, regular file, accepted extension, UTF-8
    /// contents, and that the text is not whitespace-only.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(SourceError::NotAFile(path.to_path_buf()));
        }
        if !has_accepted_extension(path) {
            return Err(SourceError::UnsupportedExtension(path.to_path_buf()));
        }

        let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if text.trim().is_empty() {
            return Err(SourceError::Empty(path.to_path_buf()));
        }

        Ok(Self {
            path: path.display().to_string(),
            language: Language::from_path(path),
            text,
        })
    }

    /// In-memory source, no validation.
    pub fn from_text(id: impl Into<String>, language: Language, text: impl Into<String>) -> Self {
        Self {
            path: id.into(),
            language,
            text: text.into(),
        }
    }

    /// Final path component, or the whole identifier when it has none.
    pub fn file_name(&self) -> &str {
        file_name(&self.path)
    }
}

/// Final path component of `id`, or `id` itself when it has none.
pub fn file_name(id: &str) -> &str {
    Path::new(id)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(id)
}

fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    fn write_temp(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_python_file_with_language() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "main.py", "print('hi')\n");
        let source = SourceFile::load(&path).unwrap();
        assert_eq!(source.language, Language::Python);
        assert_eq!(source.text, "print('hi')\n");
        assert_eq!(source.file_name(), "main.py");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "Main.JAVA", "class A {}");
        let source = SourceFile::load(&path).unwrap();
        assert_eq!(source.language, Language::Java);
    }

    #[test]
    fn accepted_extension_outside_language_table_is_unknown() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "main.go", "package main");
        let source = SourceFile::load(&path).unwrap();
        assert_eq!(source.language, Language::Unknown);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = SourceFile::load(dir.path().join("nope.py")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = Builder::new().suffix(".py").tempdir().unwrap();
        let err = SourceFile::load(dir.path()).unwrap_err();
        assert!(matches!(err, SourceError::NotAFile(_)));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "notes.txt", "hello");
        let err = SourceFile::load(&path).unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedExtension(_)));

        let path = write_temp(&dir, "Makefile", "all:");
        let err = SourceFile::load(&path).unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedExtension(_)));
    }

    #[test]
    fn whitespace_only_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_temp(&dir, "blank.c", "  \n\t\n");
        let err = SourceFile::load(&path).unwrap_err();
        assert!(matches!(err, SourceError::Empty(_)));
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.js");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        let err = SourceFile::load(&path).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("bin.js"));
    }

    #[test]
    fn from_text_keeps_identifier() {
        let source = SourceFile::from_text("dir/inline.py", Language::Python, "x = 1");
        assert_eq!(source.path, "dir/inline.py");
        assert_eq!(source.file_name(), "inline.py");
    }
}
