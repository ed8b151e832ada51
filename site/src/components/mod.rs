//! Leptos components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! Shell
//! ├── DocumentHead
//! ├── SiteHeader
//! ├── (children, e.g. HomeContent)
//! │   ├── Hero
//! │   ├── FeatureCards
//! │   ├── Stats
//! │   └── ClosingCta
//! └── SiteFooter
//! ```
//!
//! Components are usually rendered through [`crate::render_home`] or
//! [`crate::render_page`].

mod closing;
mod document;
mod features;
mod footer;
mod header;
mod hero;
mod home;
mod stats;
mod ui;

pub use closing::ClosingCta;
pub use document::{DocumentHead, Shell};
pub use features::FeatureCards;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::Hero;
pub use home::HomeContent;
pub use stats::Stats;
pub use ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    button_class,
};
