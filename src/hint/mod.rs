//! Resource hint plugin: preload/prefetch link-tag generation.
//!
//! Hooks two pipeline phases: captures the public base path while it is
//! still visible, then expands the pass's per-category filters against
//! the emitted asset set and appends the resulting `<link>` tags to the
//! document head.
//!
//! Filter expansion rules:
//! - a category set to `false` emits nothing;
//! - an absent category defaults to `**/*.*` (every emitted asset);
//! - a pattern without `*` is a literal pass-through: one tag, whether or
//!   not a matching asset was emitted;
//! - a glob pattern emits one tag per matching asset, in emission order.
//!
//! All preload tags precede all prefetch tags in the appended block, and
//! only preload tags receive an `as` attribute.

pub mod destination;

use anyhow::Result;
use fast_glob::glob_match;
use thiserror::Error;

use crate::config::{FilterSet, HintFilter};
use crate::debug;
use crate::pipeline::{AssetSet, BuildAssets, HeadPlugin, PageScaffold};
use crate::tag::HeadTag;

/// Filter applied when a category is left unconfigured.
const MATCH_ALL: &str = "**/*.*";

// ============================================================================
// Hint Kind
// ============================================================================

/// Hint categories, in injection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    /// High-priority fetch for near-certain use this page load.
    Preload,
    /// Opportunistic fetch for a likely future navigation.
    Prefetch,
}

impl HintKind {
    /// `rel` attribute value for this category.
    pub const fn rel(self) -> &'static str {
        match self {
            Self::Preload => "preload",
            Self::Prefetch => "prefetch",
        }
    }
}

// ============================================================================
// Plugin Error
// ============================================================================

/// Errors raised at plugin construction time.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The plugin has no options of its own; behavior is driven entirely
    /// by per-pass page options.
    #[error("the resource hint plugin does not accept any options")]
    UnexpectedOptions,
}

// ============================================================================
// Resource Hint Plugin
// ============================================================================

/// Injects `preload`/`prefetch` link tags for emitted assets.
#[derive(Debug, Default)]
pub struct ResourceHintPlugin {
    /// Public base path captured in the early phase. Pass-scoped: valid
    /// from `before-html-render` until the end of the same pass, which is
    /// sound because passes run sequentially per plugin instance.
    public_path: Option<String>,
}

impl ResourceHintPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct from a plugin-options value as handed over by pipeline
    /// configuration. Supplying any options table at all is a usage
    /// error, caught here before the plugin ever registers.
    pub fn from_options(options: Option<serde_json::Value>) -> Result<Self, PluginError> {
        if options.is_some() {
            return Err(PluginError::UnexpectedOptions);
        }
        Ok(Self::new())
    }

    /// Expand one category's filter into its link tags, in order.
    fn collect(
        &self,
        kind: HintKind,
        filter: &HintFilter,
        assets: &AssetSet,
        self_closing: bool,
    ) -> Vec<HeadTag> {
        let patterns = match filter.normalize() {
            FilterSet::Disabled => return Vec::new(),
            FilterSet::Default => vec![MATCH_ALL.to_string()],
            FilterSet::Patterns(patterns) => patterns,
        };

        let public_path = self.public_path.as_deref().unwrap_or("");

        let mut tags = Vec::new();
        for pattern in &patterns {
            if pattern.contains('*') {
                for file in assets.keys().filter(|f| glob_match(pattern.as_str(), f.as_str())) {
                    tags.push(link_tag(kind, public_path, file, self_closing));
                }
            } else {
                // Literal names pass through untouched, whether or not a
                // matching asset was emitted.
                tags.push(link_tag(kind, public_path, pattern, self_closing));
            }
        }
        tags
    }
}

/// Build one link tag. The destination lookup runs on the original path
/// component, before the public path is prepended.
fn link_tag(kind: HintKind, public_path: &str, path: &str, self_closing: bool) -> HeadTag {
    let mut tag = HeadTag::link(kind.rel(), format!("{public_path}{path}"), self_closing);
    if kind == HintKind::Preload
        && let Some(dest) = destination::for_path(path)
    {
        tag.set_attr("as", dest);
    }
    tag
}

impl HeadPlugin for ResourceHintPlugin {
    fn before_html_render(&mut self, assets: &BuildAssets) -> Result<()> {
        // The public path is not visible in the later phase, so capture it
        // here, as-is (the build guarantees the trailing slash).
        self.public_path = Some(assets.public_path.clone());
        Ok(())
    }

    fn alter_head_tags(&mut self, page: &mut PageScaffold<'_>) -> Result<()> {
        let opts = page.options;
        let preload = self.collect(HintKind::Preload, &opts.preload, page.assets, opts.xhtml);
        let prefetch = self.collect(HintKind::Prefetch, &opts.prefetch, page.assets, opts.xhtml);

        debug!("hints"; "{} preload, {} prefetch", preload.len(), prefetch.len());

        // Single combined append: the preload block first, then prefetch.
        page.head.extend(preload);
        page.head.extend(prefetch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageOptions;
    use crate::pipeline::Generator;
    use crate::tag::render_head;

    fn run(assets: &BuildAssets, options: &PageOptions) -> Vec<HeadTag> {
        let mut generator = Generator::new();
        generator.register(ResourceHintPlugin::new());
        let mut head = Vec::new();
        generator.run_pass(assets, options, &mut head).unwrap();
        head
    }

    fn options(source: &str) -> PageOptions {
        toml::from_str(source).unwrap()
    }

    fn main_js_assets() -> BuildAssets {
        let mut assets = BuildAssets::new("");
        assets.emit("main.js", 1024);
        assets
    }

    #[test]
    fn defaults_hint_every_asset() {
        let head = run(&main_js_assets(), &PageOptions::default());
        assert_eq!(
            render_head(&head),
            r#"<link rel="preload" href="main.js" as="script"><link rel="prefetch" href="main.js">"#
        );
    }

    #[test]
    fn explicit_filters_match_like_defaults() {
        let opts = options(
            r#"
            prefetch = "*.js"
            preload = "*.js"
            "#,
        );
        let head = run(&main_js_assets(), &opts);
        assert_eq!(
            render_head(&head),
            r#"<link rel="preload" href="main.js" as="script"><link rel="prefetch" href="main.js">"#
        );
    }

    #[test]
    fn unmatched_glob_and_disabled_category_emit_nothing() {
        let opts = options(
            r#"
            prefetch = "*.json"
            preload = false
            "#,
        );
        let head = run(&main_js_assets(), &opts);
        assert!(head.is_empty());
    }

    #[test]
    fn literal_prefetch_passes_through_without_existence_check() {
        let opts = options(r#"prefetch = ["demo.json"]"#);
        let head = run(&main_js_assets(), &opts);

        let rendered = render_head(&head);
        assert!(rendered.contains(r#"<link rel="prefetch" href="demo.json">"#));
    }

    #[test]
    fn literal_preload_passes_through_and_skips_unknown_destination() {
        let opts = options(r#"preload = ["*.js", "demo.json"]"#);
        let head = run(&main_js_assets(), &opts);

        assert_eq!(
            render_head(&head),
            r#"<link rel="preload" href="main.js" as="script"><link rel="preload" href="demo.json">"#
        );
    }

    #[test]
    fn prefetch_never_carries_as() {
        let opts = options(r#"preload = false"#);
        let head = run(&main_js_assets(), &opts);

        assert_eq!(head.len(), 1);
        assert_eq!(head[0].attr("rel"), Some("prefetch"));
        assert_eq!(head[0].attr("as"), None);
    }

    #[test]
    fn preload_block_precedes_prefetch_block() {
        let mut assets = BuildAssets::new("");
        assets.emit("main.js", 10);
        assets.emit("site.css", 20);

        let head = run(&assets, &PageOptions::default());
        let rels: Vec<_> = head.iter().map(|t| t.attr("rel").unwrap()).collect();
        assert_eq!(rels, ["preload", "preload", "prefetch", "prefetch"]);

        // Within a category, emission order.
        assert_eq!(head[0].attr("href"), Some("main.js"));
        assert_eq!(head[1].attr("href"), Some("site.css"));
    }

    #[test]
    fn public_path_prefixes_globs_and_literals() {
        let mut assets = BuildAssets::new("/static/");
        assets.emit("main.js", 1);

        let opts = options(r#"prefetch = ["*.js", "demo.json"]"#);
        let head = run(&assets, &opts);

        assert_eq!(
            render_head(&head),
            r#"<link rel="prefetch" href="/static/main.js"><link rel="prefetch" href="/static/demo.json">"#
        );
    }

    #[test]
    fn destination_looks_at_path_not_href() {
        // `/static/` must not confuse the extension lookup.
        let mut assets = BuildAssets::new("/static/v2.0/");
        assets.emit("app.css", 1);

        let opts = options(r#"preload = "*.css""#);
        let head = run(&assets, &opts);
        assert_eq!(head[0].attr("as"), Some("style"));
        assert_eq!(head[0].attr("href"), Some("/static/v2.0/app.css"));
    }

    #[test]
    fn nested_assets_match_the_default_filter() {
        let mut assets = BuildAssets::new("");
        assets.emit("js/chunk.0.js", 1);
        assets.emit("fonts/inter.woff2", 2);

        let opts = options(r#"prefetch = false"#);
        let head = run(&assets, &opts);

        assert_eq!(head.len(), 2);
        assert_eq!(head[0].attr("href"), Some("js/chunk.0.js"));
        assert_eq!(head[0].attr("as"), Some("script"));
        assert_eq!(head[1].attr("href"), Some("fonts/inter.woff2"));
        assert_eq!(head[1].attr("as"), Some("font"));
    }

    #[test]
    fn filter_declaration_order_is_kept() {
        let mut assets = BuildAssets::new("");
        assets.emit("a.js", 1);
        assets.emit("b.css", 2);

        let opts = options(r#"prefetch = ["*.css", "*.js"]"#);
        let head = run(&assets, &opts);

        let hrefs: Vec<_> = head.iter().map(|t| t.attr("href").unwrap()).collect();
        assert_eq!(hrefs, ["b.css", "a.js"]);
    }

    #[test]
    fn xhtml_flag_self_closes_generated_tags() {
        let opts = options(
            r#"
            prefetch = false
            xhtml = true
            "#,
        );
        let head = run(&main_js_assets(), &opts);
        assert_eq!(
            render_head(&head),
            r#"<link rel="preload" href="main.js" as="script"/>"#
        );
    }

    #[test]
    fn empty_asset_set_with_defaults_emits_nothing() {
        let head = run(&BuildAssets::new("/"), &PageOptions::default());
        assert!(head.is_empty());
    }

    #[test]
    fn options_are_rejected_at_construction() {
        let err = ResourceHintPlugin::from_options(Some(serde_json::json!({}))).unwrap_err();
        assert!(matches!(err, PluginError::UnexpectedOptions));

        assert!(ResourceHintPlugin::from_options(None).is_ok());
    }
}
