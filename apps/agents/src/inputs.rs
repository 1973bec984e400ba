//! Loading of user-supplied text files (resumes, JDs, profiles, code).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Reads a UTF-8 file and trims surrounding whitespace.
pub fn load_text(path: impl AsRef<Path>) -> Result<String, AppError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| with_path(e, path))?;
    Ok(text.trim().to_string())
}

/// All `*.txt` files directly inside `folder`, sorted by file name.
pub fn list_text_files(folder: impl AsRef<Path>) -> Result<Vec<PathBuf>, AppError> {
    let folder = folder.as_ref();
    let mut files = Vec::new();

    for entry in fs::read_dir(folder).map_err(|e| with_path(e, folder))? {
        let path = entry?.path();
        let is_txt = path.extension().and_then(|ext| ext.to_str()) == Some("txt");
        if is_txt && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Loads every `*.txt` file in `folder` as `(stem, text)`, sorted by file name.
pub fn load_text_folder(folder: impl AsRef<Path>) -> Result<Vec<(String, String)>, AppError> {
    list_text_files(folder)?
        .into_iter()
        .map(|path| Ok((file_stem(&path), load_text(&path)?)))
        .collect()
}

/// File name without its extension; empty when the path has none.
pub fn file_stem(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn with_path(error: io::Error, path: &Path) -> AppError {
    AppError::Io(io::Error::new(
        error.kind(),
        format!("{}: {error}", path.display()),
    ))
}
