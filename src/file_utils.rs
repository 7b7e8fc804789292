use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::errors::{AppError, AppResult};

// @module: File and directory utilities

const UTF8_BOM: char = '\u{feff}';

/// Text encoding that successfully decoded a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// ISO-8859-1, one byte per character
    Latin1,
}

/// Decoded file content
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub content: String,
    pub encoding: TextEncoding,
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @checks: Input directory, with the reason it is unusable
    pub fn validate_input_dir<P: AsRef<Path>>(path: P) -> AppResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::InvalidInputPath {
                path: path.to_path_buf(),
                reason: "does not exist".to_string(),
            });
        }
        if !path.is_dir() {
            return Err(AppError::InvalidInputPath {
                path: path.to_path_buf(),
                reason: "is not a directory".to_string(),
            });
        }
        Ok(())
    }

    /// Find files with a specific extension directly inside a directory.
    ///
    /// Subdirectories are not searched. The extension is matched
    /// case-sensitively and results are sorted by file name.
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> AppResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let wanted = extension.trim_start_matches('.');
        let mut result = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                // Broken links and unreadable entries only cost that entry
                Err(e) if e.depth() > 0 => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
                Err(e) => {
                    return Err(AppError::InvalidInputPath {
                        path: dir.to_path_buf(),
                        reason: format!("failed to read directory: {}", e),
                    });
                }
            };
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }
            let matches = path
                .extension()
                .is_some_and(|ext| ext.to_string_lossy() == wanted);
            if matches {
                result.push(path.to_path_buf());
            }
        }

        result.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(result)
    }

    /// Decode raw bytes as UTF-8, falling back to Latin-1 when allowed.
    ///
    /// Returns `None` only when the bytes are not UTF-8 and the fallback is
    /// disabled, since every byte sequence is valid Latin-1.
    pub fn decode_text(bytes: Vec<u8>, latin1_fallback: bool) -> Option<DecodedText> {
        match String::from_utf8(bytes) {
            Ok(content) => {
                let content = match content.strip_prefix(UTF8_BOM) {
                    Some(stripped) => stripped.to_string(),
                    None => content,
                };
                Some(DecodedText { content, encoding: TextEncoding::Utf8 })
            }
            Err(e) if latin1_fallback => {
                let content = e.into_bytes().into_iter().map(char::from).collect();
                Some(DecodedText { content, encoding: TextEncoding::Latin1 })
            }
            Err(_) => None,
        }
    }

    /// Read a text file, trying UTF-8 first and Latin-1 second
    pub fn read_text<P: AsRef<Path>>(path: P, latin1_fallback: bool) -> AppResult<DecodedText> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| AppError::FileProcessing {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let decoded = Self::decode_text(bytes, latin1_fallback).ok_or_else(|| AppError::FileDecode {
            path: path.to_path_buf(),
            reason: "content is not valid UTF-8".to_string(),
        })?;

        if decoded.encoding == TextEncoding::Latin1 {
            debug!("{:?} is not valid UTF-8, decoded as Latin-1", path);
        }
        Ok(decoded)
    }

    /// Write a string to a file in one step.
    ///
    /// The content goes to a temporary file in the destination directory which
    /// then replaces the target, so readers never see a half-written file.
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> AppResult<()> {
        let path = path.as_ref();
        let write_err = |source: std::io::Error| AppError::OutputWrite {
            path: path.to_path_buf(),
            source,
        };

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
        temp.write_all(content.as_bytes()).map_err(write_err)?;
        temp.flush().map_err(write_err)?;
        temp.persist(path).map_err(|e| write_err(e.error))?;

        Ok(())
    }
}
