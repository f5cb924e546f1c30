//! Text documents as handed over by the host editor.

use std::path::{Path, PathBuf};

/// One revision of an open buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    /// `file://` URI identifying the document.
    pub uri: String,
    /// Editor-assigned revision number.
    pub version: i32,
    /// Full buffer contents.
    pub text: String,
}

impl TextDocument {
    pub fn new(uri: impl Into<String>, version: i32, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            version,
            text: text.into(),
        }
    }

    /// Build a document for a file on disk, deriving its URI from the path.
    pub fn from_path(path: &Path, text: impl Into<String>) -> Self {
        Self::new(path_to_uri(path), 0, text)
    }

    /// Filesystem path the document refers to.
    pub fn fs_path(&self) -> PathBuf {
        uri_to_path(&self.uri)
    }
}

/// Convert a `file://` URI into a filesystem path.
///
/// Percent-escapes are decoded. Inputs without the `file://` scheme are
/// treated as plain paths.
pub fn uri_to_path(uri: &str) -> PathBuf {
    let Some(rest) = uri.strip_prefix("file://") else {
        return PathBuf::from(uri);
    };
    // Skip an authority component ("file://localhost/...").
    let rest = match rest.find('/') {
        Some(0) | None => rest,
        Some(idx) => &rest[idx..],
    };
    let decoded = urlencoding::decode(rest)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| rest.to_string());

    // file:///C:/x -> C:/x
    let bytes = decoded.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[2] == b':' && bytes[1].is_ascii_alphabetic()
    {
        return PathBuf::from(&decoded[1..]);
    }
    PathBuf::from(decoded)
}

/// Convert a filesystem path into a `file://` URI.
pub fn path_to_uri(path: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    let raw = absolute.to_string_lossy().replace('\\', "/");
    let encoded = raw
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    if encoded.starts_with('/') {
        format!("file://{}", encoded)
    } else {
        format!("file:///{}", encoded)
    }
}
