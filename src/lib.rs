#![cfg_attr(not(feature = "std"), no_std)]
//! Immutable URL values with per-component accessors and `with_*`/`without_*`
//! builders.
//!
//! ```
//! use urlbuild::Url;
//!
//! let url = Url::new("https://dear-johnny.io/foo/bar?sun=is-shining&training=yes#hello-world")
//!     .with_path_segment(1, "hoo")
//!     .without_query_param("training")
//!     .with_query_param("sun", "off")
//!     .without_fragment();
//!
//! assert_eq!(url.to_string(), "https://dear-johnny.io/hoo/bar?sun=off");
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod config;
mod current;
mod encoding;
mod error;
mod helpers;
mod host;
mod parser;
mod path;
mod query;
mod types;
mod url_value;
mod url_components;

// Public API
pub use config::UrlConfig;
pub use current::{SchemeDetector, ServerVars, current_url};
pub use error::{ParseError, Result};
pub use parser::parse;
pub use query::{MAX_NESTING_DEPTH, QueryParams, QueryValue};
pub use types::Component;
pub use url_value::Url;
pub use url_components::UrlComponents;
