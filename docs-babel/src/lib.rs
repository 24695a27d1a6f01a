//! Conversion and navigation tooling for the docs pipeline
//!
//!     This crate powers the two halves of the documentation build: turning the legacy Hugo
//!     Markdown tree into MDX pages, and generating the site's JSON configuration (navigation
//!     included) from YAML sources.
//!
//!     This is a pure lib, that is, it powers docs-cli but is shell agnostic: no code here
//!     prints to stdout, reads env vars or exits the process. Progress is reported through
//!     `tracing` and the binary decides what to show.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # DocsError, Result
//!     ├── mdx                     # Markdown → MDX line rewriter
//!     │   ├── mod.rs              # cursor driven pass over the document
//!     │   ├── frontmatter.rs      # description block folding
//!     │   ├── accordion.rs        # <details> → <Accordion>
//!     │   └── escape.rs           # angle bracket escaping, heading anchors
//!     ├── convert.rs              # source tree → destination tree
//!     ├── navigation              # YAML site config → JSON site config
//!     │   ├── site.rs             # input model
//!     │   ├── docs_json.rs        # output model
//!     │   ├── merge.rs            # multi-file merge
//!     │   ├── pages.rs            # explicit page lists
//!     │   ├── scan.rs             # folder scanning
//!     │   └── missing.rs          # pages not covered by any group
//!     └── schema.rs               # JSON Schema validation
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so these are
//!     included from tests/lib.rs.
//!
//! Core Algorithm
//!
//!     The MDX conversion is the only part with real structure: a single forward pass over
//!     the lines with a cursor that can jump ahead (description blocks, accordions) and a
//!     frontmatter flag. Each construct has its own small module so the pass itself stays a
//!     flat dispatch. See ./mdx/mod.rs for the rule table.
//!
//!     Malformed markup is never an error. Unterminated accordions and shortcodes fall back
//!     to per-line handling, so a conversion only fails on I/O.
//!
//! Navigation
//!
//!     The YAML model accepts partial files so that a site can split its navigation across
//!     several configs. The output model mirrors the JSON the docs platform expects, with
//!     optional sections omitted rather than emitted as null.
//!
//!     Schemas are consumed by reference and only ever read from disk.
pub mod convert;
pub mod error;
pub mod mdx;
pub mod navigation;
pub mod schema;

pub use convert::{convert_tree, ConvertOptions, ConvertReport};
pub use error::{DocsError, Result};
pub use mdx::{convert_file, convert_lines, convert_str};
pub use navigation::{generate, merge_configs, DocsJson, GenerateOptions, SiteConfig};
pub use schema::{SchemaSource, SchemaValidator};
