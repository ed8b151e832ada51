//! # qnom-site
//!
//! Static landing page for QNom, rendered ahead of time with
//! [Leptos](https://leptos.dev/) server-side rendering.
//!
//! The page is a fixed composition: a [`components::Shell`] (document head,
//! sticky header, footer) wrapping [`components::HomeContent`] (hero, three
//! feature cards, four stats, closing call to action). All text lives in
//! [`content`] and is checked for completeness by [`check`] before a build
//! writes anything.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = qnom_site::render_home();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Find Food Now"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - Literal page data
//! - [`check`] - Content-completeness check
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`config`] - `qnom.toml` loading
//! - [`generate`] - Writes the rendered site to disk
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod check;
pub mod components;
pub mod config;
pub mod content;
pub mod generate;
pub mod styles;

use components::{HomeContent, Shell};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use check::{ContentError, check_content};
pub use config::{ConfigError, SiteConfig};
pub use generate::{BuildError, BuildReport, SiteManifest, build_site};

/// Render the home page as a complete HTML document.
///
/// Output is deterministic: every call returns the same string.
pub fn render_home() -> String {
    render_page(|| view! { <HomeContent /> })
}

/// Render arbitrary page content inside the site [`Shell`].
///
/// # Example
///
/// ```rust
/// use leptos::prelude::*;
///
/// let html = qnom_site::render_page(|| view! { <main>"Coming soon"</main> });
/// assert!(html.contains("Coming soon"));
/// assert!(html.contains("<footer"));
/// ```
pub fn render_page<F, V>(content: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let doc = view! { <Shell>{content()}</Shell> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
