//! Resource hint injection for HTML generation pipelines.
//!
//! `linkhint` hooks into a page-generation pipeline and appends
//! `<link rel="preload">` / `<link rel="prefetch">` tags to the document
//! head, derived from glob filters matched against the filenames the build
//! actually emitted.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── config/    # Per-pass page options (filter shapes, xhtml flag)
//! ├── tag/       # Head-fragment descriptors and serialization
//! ├── pipeline/  # Host pipeline model: passes, phases, plugin hooks
//! ├── hint/      # The resource hint plugin itself
//! └── logger     # log!/debug! macros
//! ```
//!
//! # Example
//!
//! ```
//! use linkhint::{BuildAssets, Generator, PageOptions, ResourceHintPlugin};
//! use linkhint::tag::render_head;
//!
//! let mut assets = BuildAssets::new("");
//! assets.emit("main.js", 1024);
//!
//! let mut generator = Generator::new();
//! generator.register(ResourceHintPlugin::new());
//!
//! let mut head = Vec::new();
//! generator.run_pass(&assets, &PageOptions::default(), &mut head).unwrap();
//!
//! assert_eq!(
//!     render_head(&head),
//!     r#"<link rel="preload" href="main.js" as="script"><link rel="prefetch" href="main.js">"#
//! );
//! ```

pub mod config;
pub mod hint;
pub mod logger;
pub mod pipeline;
pub mod tag;

pub use config::{FilterSet, HintFilter, PageOptions};
pub use hint::{HintKind, PluginError, ResourceHintPlugin};
pub use pipeline::{AssetInfo, AssetSet, BuildAssets, Generator, HeadPlugin, PageScaffold};
pub use tag::HeadTag;
