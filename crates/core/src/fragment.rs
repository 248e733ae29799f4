//! Fragment model: one named or unnamed unit of expression text.

use std::fmt;
use std::path::Path;

/// Where a fragment's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    FromFile,
    Inline,
}

/// One unit of expression text to be joined.
///
/// File fragments carry an identifier derived from the file's base name;
/// inline fragments carry none and are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    identifier: Option<String>,
    body: String,
    provenance: Provenance,
}

impl Fragment {
    /// A file-derived fragment. The identifier must be non-empty.
    pub fn from_file(identifier: impl Into<String>, body: impl Into<String>) -> Self {
        let identifier = identifier.into();
        debug_assert!(!identifier.is_empty(), "file fragment without identifier");
        Fragment {
            identifier: Some(identifier),
            body: body.into(),
            provenance: Provenance::FromFile,
        }
    }

    /// An inline expression, conventionally `Identifier = Expression`.
    /// The text is not checked.
    pub fn inline(body: impl Into<String>) -> Self {
        Fragment {
            identifier: None,
            body: body.into(),
            provenance: Provenance::Inline,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }
}

/// Renders `#"<identifier>" = <body>` for file fragments and the body
/// verbatim for inline ones.
impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.identifier {
            Some(id) => write!(f, "#\"{}\" = {}", id, self.body),
            None => f.write_str(&self.body),
        }
    }
}

/// Base name of `path` without its final extension (`queries/A.pq` -> `A`,
/// `a.b.pq` -> `a.b`). `None` when the path has no usable file name.
pub fn identifier_for(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

/// Drop a leading UTF-8 byte-order mark, keeping everything else as-is.
pub(crate) fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_owned(),
        None => text,
    }
}
