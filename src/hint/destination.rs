//! Preload destination (`as` attribute) lookup.
//!
//! The `as` value names the request destination of a preloaded resource;
//! the browser needs it for prioritization and for matching the preload
//! against the later real request. Only the listed extensions map to a
//! destination; everything else gets no `as` attribute at all.

use std::path::Path;

/// Request destination tokens.
pub mod types {
    pub const SCRIPT: &str = "script";
    pub const STYLE: &str = "style";
    pub const FONT: &str = "font";
    pub const IMAGE: &str = "image";
}

/// Destination for a path's extension, `None` when the extension is not
/// in the preload table.
///
/// Matching is case-sensitive on the literal extension string.
pub fn for_path(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?;
    for_extension(ext)
}

/// Destination for an extension string (without the leading dot).
pub fn for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "js" => Some(types::SCRIPT),
        "css" => Some(types::STYLE),
        "woff" | "woff2" => Some(types::FONT),
        "jpg" | "jpeg" | "gif" | "png" | "svg" => Some(types::IMAGE),
        _ => None,
    }
}
