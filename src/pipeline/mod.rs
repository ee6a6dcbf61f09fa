//! Host pipeline model: generation passes, phases, and plugin hooks.
//!
//! Models the collaborating page-generation pipeline to the extent plugins
//! need it: the build's emitted assets with their public base path, a
//! per-pass head-tag list, and two named phases that plugins hook
//! synchronously.
//!
//! # Phases
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ before-html-render                           │
//! │   build outputs visible (public path, files) │
//! └──────────────────────────────────────────────┘
//! ┌──────────────────────────────────────────────┐
//! │ alter-head-tags                              │
//! │   head list open for appends                 │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Each hook runs exactly once per pass, in registration order within a
//! phase; returning `Ok(())` is the completion signal. Passes are driven
//! sequentially for a given [`Generator`], never concurrently.

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::PageOptions;
use crate::debug;
use crate::tag::HeadTag;

// ============================================================================
// Build Assets
// ============================================================================

/// Metadata for one emitted asset.
///
/// Plugins mostly key off the filename; the byte size is carried for
/// logging and diagnostics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AssetInfo {
    pub size: u64,
}

/// Insertion-ordered map from emitted filename to its metadata.
///
/// Emission order is observable: plugins that expand filters against the
/// set emit tags in this order.
pub type AssetSet = IndexMap<String, AssetInfo>;

/// Build outputs visible to plugins during one generation pass.
#[derive(Debug, Clone, Default)]
pub struct BuildAssets {
    /// Public base path; when non-empty the build guarantees a trailing `/`.
    pub public_path: String,
    /// Emitted files, in emission order.
    pub files: AssetSet,
}

impl BuildAssets {
    pub fn new(public_path: impl Into<String>) -> Self {
        Self {
            public_path: public_path.into(),
            files: AssetSet::new(),
        }
    }

    /// Record an emitted file. Re-emitting a name keeps its original slot.
    pub fn emit(&mut self, name: impl Into<String>, size: u64) {
        self.files.insert(name.into(), AssetInfo { size });
    }
}

// ============================================================================
// Page Scaffold
// ============================================================================

/// Mutable per-pass view handed to the `alter-head-tags` phase.
///
/// The public path is deliberately absent: it is only visible in the
/// earlier phase, mirroring the host pipeline's data availability.
pub struct PageScaffold<'a> {
    /// Options supplied with this pass.
    pub options: &'a PageOptions,
    /// Emitted assets, in emission order.
    pub assets: &'a AssetSet,
    /// Ordered head fragments. Plugins append; existing entries are never
    /// removed or reordered.
    pub head: &'a mut Vec<HeadTag>,
}

// ============================================================================
// Plugin Hooks
// ============================================================================

/// Synchronous plugin hooks, one per pipeline phase.
///
/// Default implementations are no-ops so a plugin only implements the
/// phases it cares about.
pub trait HeadPlugin {
    /// `before-html-render`: build outputs (including the public path)
    /// are visible; nothing has been rendered yet.
    fn before_html_render(&mut self, _assets: &BuildAssets) -> Result<()> {
        Ok(())
    }

    /// `alter-head-tags`: append tags to the scaffold's head list.
    fn alter_head_tags(&mut self, _page: &mut PageScaffold<'_>) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Drives generation passes over registered plugins.
#[derive(Default)]
pub struct Generator {
    plugins: Vec<Box<dyn HeadPlugin>>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Hooks run in registration order within a phase.
    pub fn register(&mut self, plugin: impl HeadPlugin + 'static) -> &mut Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run one generation pass: both phases, every plugin, in order.
    ///
    /// `head` holds the document's existing head fragments and receives
    /// plugin appends.
    pub fn run_pass(
        &mut self,
        assets: &BuildAssets,
        options: &PageOptions,
        head: &mut Vec<HeadTag>,
    ) -> Result<()> {
        debug!(
            "generate";
            "pass: {} assets, {} plugins",
            assets.files.len(),
            self.plugins.len()
        );

        for plugin in &mut self.plugins {
            plugin.before_html_render(assets)?;
        }

        let mut page = PageScaffold {
            options,
            assets: &assets.files,
            head,
        };
        for plugin in &mut self.plugins {
            plugin.alter_head_tags(&mut page)?;
        }

        Ok(())
    }
}
