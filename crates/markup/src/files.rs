// ABOUTME: File I/O helpers shared by the postpress tools.
// ABOUTME: Reads UTF-8 HTML with categorized errors, writes atomically, derives .min.html paths.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::TransformError;

/// Read an HTML file into a string.
///
/// Missing files map to `FileNotFound`, undecodable (non-UTF-8) input to
/// `Parse`, anything else to `Read`.
pub fn read_html(path: &Path) -> Result<String, TransformError> {
    match fs::read_to_string(path) {
        Ok(html) => Ok(html),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(TransformError::file_not_found(
            path.display().to_string(),
            "read_html",
        )),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(TransformError::parse(
            path.display().to_string(),
            "read_html",
            Some(e.into()),
        )),
        Err(e) => Err(TransformError::read(
            path.display().to_string(),
            "read_html",
            Some(e.into()),
        )),
    }
}

/// Write an HTML file atomically: a sibling temp file is written first and
/// renamed over the destination, so an in-place overwrite can never leave a
/// torn file behind.
pub fn write_html(path: &Path, html: &str) -> Result<(), TransformError> {
    let tmp = match path.file_name() {
        Some(name) => {
            let mut tmp_name = name.to_os_string();
            tmp_name.push(".tmp");
            path.with_file_name(tmp_name)
        }
        None => {
            return Err(TransformError::write(
                path.display().to_string(),
                "write_html",
                Some(anyhow::anyhow!("path has no file name")),
            ))
        }
    };

    fs::write(&tmp, html).map_err(|e| {
        TransformError::write(path.display().to_string(), "write_html", Some(e.into()))
    })?;
    fs::rename(&tmp, path).map_err(|e| {
        TransformError::write(path.display().to_string(), "write_html", Some(e.into()))
    })
}

/// Default output path: `<stem>.min.html` next to the input.
pub fn minified_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}.min.html", stem))
}
