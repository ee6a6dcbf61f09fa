//! Per-pass page options supplied by the document-generation stage.
//!
//! The hint plugin carries no configuration of its own; everything it does
//! is driven by the options attached to the generation pass it runs in.
//!
//! # Example
//!
//! ```toml
//! preload = ["*.js", "fonts/*.woff2"]
//! prefetch = "*.json"
//! xhtml = false
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Page Options
// ============================================================================

/// Options attached to one page-generation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    /// Preload filter: `false` | absent | pattern | pattern list.
    pub preload: HintFilter,
    /// Prefetch filter, same shapes as `preload`.
    pub prefetch: HintFilter,
    /// Render generated tags in self-closing XHTML style.
    pub xhtml: bool,
}

// ============================================================================
// Hint Filter (raw config shape)
// ============================================================================

/// Raw per-category filter value, as written in pass options.
///
/// A pattern is either a literal filename (no wildcard characters) or a
/// glob. Shape checking happens once, in [`HintFilter::normalize`]; the
/// rest of the crate only sees [`FilterSet`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HintFilter {
    /// Key absent: match every emitted asset.
    #[default]
    Unset,
    /// Explicit toggle; `false` disables the category entirely.
    Toggle(bool),
    /// A single pattern.
    Pattern(String),
    /// An ordered list of patterns.
    Patterns(Vec<String>),
}

impl HintFilter {
    /// Collapse the raw shape into its normalized form.
    ///
    /// `true` carries no pattern information, so it degrades to the
    /// match-everything default rather than erroring; malformed filter
    /// values are tolerated, never fatal.
    pub fn normalize(&self) -> FilterSet {
        match self {
            Self::Toggle(false) => FilterSet::Disabled,
            Self::Unset | Self::Toggle(true) => FilterSet::Default,
            Self::Pattern(pattern) => FilterSet::Patterns(vec![pattern.clone()]),
            Self::Patterns(patterns) => FilterSet::Patterns(patterns.clone()),
        }
    }
}

// ============================================================================
// Filter Set (normalized)
// ============================================================================

/// Normalized filter configuration for one hint category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSet {
    /// Explicit opt-out: emit no tags for this category.
    Disabled,
    /// No filter given: every emitted asset matches.
    Default,
    /// Ordered pattern list, expanded in declaration order.
    Patterns(Vec<String>),
}
