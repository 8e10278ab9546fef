//! File access gateway
//!
//! Whole-file, synchronous reads and writes of plain text. Reads normalize
//! line endings to `\n`; writes store the buffer exactly as given.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Errors surfaced to the user when reading or writing a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    /// The path does not resolve to a readable file
    NotFound,
    /// Any other fault while reading (permissions, device error, bad encoding)
    ReadFailure(String),
    /// Any fault while writing
    WriteFailure(String),
}

impl FileError {
    /// Get the message shown in the error notice
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound => "The file could not be found.",
            Self::ReadFailure(_) => "The file could not be read.",
            Self::WriteFailure(_) => "The file could not be saved.",
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::ReadFailure(msg) => write!(f, "read failed: {}", msg),
            Self::WriteFailure(msg) => write!(f, "write failed: {}", msg),
        }
    }
}

impl std::error::Error for FileError {}

/// Read the entire file as text, normalizing line endings to `\n`
pub fn read_all(path: &Path) -> Result<String, FileError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FileError::NotFound,
        _ => FileError::ReadFailure(e.to_string()),
    })?;

    if metadata.is_dir() {
        return Err(FileError::NotFound);
    }

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FileError::NotFound,
        _ => FileError::ReadFailure(e.to_string()),
    })?;

    let text = String::from_utf8(bytes)
        .map_err(|e| FileError::ReadFailure(format!("not valid UTF-8 text: {}", e)))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "read file");
    Ok(normalize_line_endings(&text))
}

/// Create or truncate the file and write exactly `content`
pub fn write_all(path: &Path, content: &str) -> Result<(), FileError> {
    fs::write(path, content).map_err(|e| FileError::WriteFailure(e.to_string()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Whether the path names an existing regular file (overwrite check)
pub fn is_existing_file(path: &Path) -> bool {
    path.is_file()
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            result.push('\n');
        } else {
            result.push(ch);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_nonexistent_file() {
        let result = read_all(Path::new("/nonexistent/path/file.txt"));
        assert_eq!(result, Err(FileError::NotFound));
    }

    #[test]
    fn test_read_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_all(dir.path()), Err(FileError::NotFound));
    }

    #[test]
    fn test_read_normalizes_crlf() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"one\r\ntwo\rthree\n").unwrap();
        temp.flush().unwrap();

        assert_eq!(read_all(temp.path()).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_read_does_not_append_newline() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"line1\nline2").unwrap();
        temp.flush().unwrap();

        assert_eq!(read_all(temp.path()).unwrap(), "line1\nline2");
    }

    #[test]
    fn test_read_invalid_utf8_is_read_failure() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();
        temp.flush().unwrap();

        assert!(matches!(
            read_all(temp.path()),
            Err(FileError::ReadFailure(_))
        ));
    }

    #[test]
    fn test_write_creates_file_with_exact_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");

        write_all(&path, "line1\nline2").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "line1\nline2");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"a much longer original body").unwrap();
        temp.flush().unwrap();

        write_all(temp.path(), "short").unwrap();
        assert_eq!(fs::read_to_string(temp.path()).unwrap(), "short");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("a.txt");

        assert!(matches!(
            write_all(&path, "x"),
            Err(FileError::WriteFailure(_))
        ));
    }

    #[test]
    fn test_is_existing_file() {
        let temp = NamedTempFile::new().unwrap();
        let dir = TempDir::new().unwrap();

        assert!(is_existing_file(temp.path()));
        assert!(!is_existing_file(dir.path()));
        assert!(!is_existing_file(&dir.path().join("nope.txt")));
    }

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb"), "a\nb");
        assert_eq!(normalize_line_endings("a\rb"), "a\nb");
        assert_eq!(normalize_line_endings("a\r\r\nb"), "a\n\nb");
        assert_eq!(normalize_line_endings("plain\n"), "plain\n");
        assert_eq!(normalize_line_endings(""), "");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FileError::NotFound.user_message(),
            "The file could not be found."
        );
        assert_eq!(
            FileError::ReadFailure("denied".into()).user_message(),
            "The file could not be read."
        );
        assert_eq!(
            FileError::WriteFailure("disk full".into()).to_string(),
            "write failed: disk full"
        );
    }
}
