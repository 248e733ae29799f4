//! Assemble: render fragments and wrap them in a binding block or record.
//!
//! No expression syntax is checked; fragment text passes through as-is.

use crate::fragment::Fragment;

/// Separator between rendered fragments.
pub const SEPARATOR: &str = ",\n";

/// How the joined fragments are wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapping<'a> {
    /// `let <bindings> in <result>`
    BindingBlock { result: &'a str },
    /// `[<bindings>]`
    Record,
}

impl<'a> Wrapping<'a> {
    /// Binding block when a non-empty result is given, record otherwise.
    pub fn for_result(result: Option<&'a str>) -> Self {
        match result {
            Some(result) if !result.is_empty() => Wrapping::BindingBlock { result },
            _ => Wrapping::Record,
        }
    }

    pub fn opening(&self) -> &'static str {
        match self {
            Wrapping::BindingBlock { .. } => "let ",
            Wrapping::Record => "[",
        }
    }

    pub fn closing(&self) -> String {
        match self {
            Wrapping::BindingBlock { result } => format!(" in {}", result),
            Wrapping::Record => "]".to_string(),
        }
    }
}

/// Render file fragments, then inline expressions, joined by
/// [`SEPARATOR`] and wrapped according to `result`.
pub fn assemble(
    file_fragments: &[Fragment],
    inline_expressions: &[String],
    result: Option<&str>,
) -> String {
    let inline: Vec<Fragment> = inline_expressions
        .iter()
        .map(|e| Fragment::inline(e.as_str()))
        .collect();
    assemble_fragments(file_fragments.iter().chain(inline.iter()), result)
}

/// Lower-level form of [`assemble`] over an already ordered fragment list.
pub fn assemble_fragments<'f>(
    fragments: impl IntoIterator<Item = &'f Fragment>,
    result: Option<&str>,
) -> String {
    let wrapping = Wrapping::for_result(result);
    let body = fragments
        .into_iter()
        .map(Fragment::to_string)
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let mut text = String::with_capacity(body.len() + 16);
    text.push_str(wrapping.opening());
    text.push_str(&body);
    text.push_str(&wrapping.closing());
    text
}
