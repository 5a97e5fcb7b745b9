//! Publish-path conventions.
//!
//! Pure string functions, no network access. Tools are published as
//! flat `.html` files at the root of the hosting branch.

use crate::error::CoreError;

pub const HTML_SUFFIX: &str = ".html";

/// Normalize a user-supplied tool name into a root-level `.html` filename.
///
/// Blank names and names that would escape the branch root are rejected.
pub fn tool_filename(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::MissingField("filename".to_string()));
    }
    if !is_root_name(name) {
        return Err(CoreError::InvalidFilename(name.to_string()));
    }

    if name.ends_with(HTML_SUFFIX) {
        Ok(name.to_string())
    } else {
        Ok(format!("{name}{HTML_SUFFIX}"))
    }
}

/// Whether `name` stays at the branch root: no separators, no `..`.
pub fn is_root_name(name: &str) -> bool {
    !name.contains(['/', '\\']) && !name.contains("..")
}

/// Whether a listed file is a published tool.
pub fn is_tool_file(name: &str) -> bool {
    name.ends_with(HTML_SUFFIX)
}

/// Public URL of a published file, given the site's base URL.
pub fn public_url(base_url: &str, filename: &str) -> String {
    format!("{}/{filename}", base_url.trim_end_matches('/'))
}
