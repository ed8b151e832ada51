//! Literal page content.
//!
//! Everything the landing page shows lives here as `'static` data: document
//! metadata, navigation, footer columns, feature cards, stats and the labels of
//! every call to action. Components read these constants directly; the
//! [`crate::check`] module validates them through [`SiteContent`].
//!
//! List lengths are pinned at compile time by the `const` assertions at the
//! bottom of this file, so a missing card or stat fails the build.
//!
//! # Example
//!
//! ```rust
//! use qnom_site::content::{SiteContent, STATS};
//!
//! assert_eq!(STATS[0].value, "30+");
//! assert!(SiteContent::QNOM.destinations().contains(&"/discover"));
//! ```

use serde::Serialize;

/// Number of navigation links in the header (the sign-in action is separate).
pub const NAV_LINK_COUNT: usize = 3;
/// Number of titled link columns in the footer (the brand column is separate).
pub const FOOTER_COLUMN_COUNT: usize = 3;
/// Number of value-proposition cards on the home page.
pub const FEATURE_COUNT: usize = 3;
/// Number of stat entries on the home page.
pub const STAT_COUNT: usize = 4;
/// Number of calls to action in the hero.
pub const HERO_ACTION_COUNT: usize = 2;
/// Number of calls to action in the closing section.
pub const CLOSING_ACTION_COUNT: usize = 1;

/// A labelled link to a route on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Visible link text
    pub label: &'static str,
    /// Destination path (`/discover`, `/about`, ...)
    pub href: &'static str,
}

/// A titled footer column with its links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    /// Column heading (`Product`, `Partners`, `Company`)
    pub heading: &'static str,
    /// Links in display order
    pub links: &'static [Link],
}

/// A value-proposition card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Emoji glyph shown next to the title
    pub icon: &'static str,
    /// Card title
    pub title: &'static str,
    /// One-line summary shown under the title
    pub description: &'static str,
    /// Longer body text
    pub body: &'static str,
}

/// A single headline number in the stats section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Display value, kept as text (`"14,000"`, `"$0"`)
    pub value: &'static str,
    /// Caption under the value
    pub caption: &'static str,
}

/// Social preview image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OgImage {
    /// Absolute image URL
    pub url: &'static str,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Open Graph tags for link previews.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    /// `og:title`
    pub title: &'static str,
    /// `og:description`
    pub description: &'static str,
    /// Canonical site URL (`og:url`)
    pub url: &'static str,
    /// `og:site_name`
    pub site_name: &'static str,
    /// Preview images (`og:image` with dimensions)
    pub images: &'static [OgImage],
    /// `og:locale`, e.g. `en_SG`
    pub locale: &'static str,
    /// `og:type`
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Document-level metadata emitted into `<head>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    /// Document `<title>`
    pub title: &'static str,
    /// `<meta name="description">`
    pub description: &'static str,
    /// Joined into `<meta name="keywords">`
    pub keywords: &'static [&'static str],
    /// One `<meta name="author">` each
    pub authors: &'static [&'static str],
    /// `<html lang>`
    pub lang: &'static str,
    /// Social preview tags
    pub open_graph: OpenGraph,
}

impl SiteMetadata {
    /// Keywords as a single comma-separated `content` value.
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Brand mark shown in the header and footer.
pub const BRAND: &str = "QNom";
/// Where the brand mark links to.
pub const BRAND_HREF: &str = "/";
/// Tagline under the footer brand.
pub const BRAND_TAGLINE: &str = "Your lunch hour, returned.";
/// Footer copyright line (fixed year).
pub const COPYRIGHT: &str = "© 2024 QNom. Made with ❤️ for Singapore.";
/// Label of the header sign-in action.
pub const SIGN_IN_LABEL: &str = "Sign In";

/// Google Fonts stylesheet for Inter (latin subset).
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&subset=latin&display=swap";

/// Page metadata for the `<head>`.
pub const METADATA: SiteMetadata = SiteMetadata {
    title: "QNom - Skip the Queue, Find Food Fast",
    description: "Real-time queue tracking for Singapore hawker centers and restaurants. Save 30+ minutes daily with live wait times.",
    keywords: &[
        "singapore food",
        "hawker center",
        "queue time",
        "real-time",
        "food discovery",
    ],
    authors: &["QNom Team"],
    lang: "en",
    open_graph: OpenGraph {
        title: "QNom - Skip the Queue, Find Food Fast",
        description: "Real-time queue tracking for Singapore hawker centers",
        url: "https://qnom.app",
        site_name: "QNom",
        images: &[OgImage {
            url: "https://qnom.app/og-image.png",
            width: 1200,
            height: 630,
        }],
        locale: "en_SG",
        kind: "website",
    },
};

/// Header navigation, in display order.
pub const NAV_LINKS: &[Link] = &[
    Link { label: "Discover", href: "/discover" },
    Link { label: "For Partners", href: "/partners" },
    Link { label: "About", href: "/about" },
];

/// Titled footer columns, in display order.
pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Product",
        links: &[
            Link { label: "Discover Food", href: "/discover" },
            Link { label: "Mobile App", href: "/mobile" },
            Link { label: "API Access", href: "/api" },
        ],
    },
    FooterColumn {
        heading: "Partners",
        links: &[
            Link { label: "Join as Partner", href: "/partners" },
            Link { label: "Success Stories", href: "/success" },
            Link { label: "Partner Support", href: "/support" },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            Link { label: "About Us", href: "/about" },
            Link { label: "Blog", href: "/blog" },
            Link { label: "Careers", href: "/careers" },
            Link { label: "Contact", href: "/contact" },
        ],
    },
];

/// Plain first half of the hero headline.
pub const HERO_TITLE: &str = "Queue none, ";
/// Gradient-highlighted second half of the headline.
pub const HERO_TITLE_ACCENT: &str = "nom more";
/// Paragraph under the headline.
pub const HERO_LEAD: &str = "Skip the lunch hour queues. QNom shows you real-time wait times at hawker centers and restaurants across Singapore. Save 30+ minutes daily.";
/// Hero calls to action: primary, then ghost.
pub const HERO_ACTIONS: &[&str] = &["Find Food Now", "Learn More →"];

/// Value-proposition cards, in display order.
pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⏱️",
        title: "Real-Time Queues",
        description: "Live wait times updated by the community. Know before you go.",
        body: "Crowd-sourced data from thousands of users ensures accuracy within 2 minutes.",
    },
    Feature {
        icon: "🍜",
        title: "Smart Recommendations",
        description: "AI-powered suggestions based on your taste, location, and time.",
        body: "Discover hidden gems and avoid the crowds with personalized recommendations.",
    },
    Feature {
        icon: "💰",
        title: "Forever Free",
        description: "Zero commission for hawkers. Free for diners. Always.",
        body: "Supporting Singapore's hawker heritage with technology that helps, not hurts.",
    },
];

/// Heading of the stats section.
pub const STATS_TITLE: &str = "Making lunch hour efficient";
/// Headline numbers, in display order.
pub const STATS: &[Stat] = &[
    Stat { value: "30+", caption: "Minutes saved daily" },
    Stat { value: "118", caption: "Hawker centers" },
    Stat { value: "14,000", caption: "Food stalls" },
    Stat { value: "$0", caption: "Commission fees" },
];

/// Heading of the closing section.
pub const CLOSING_TITLE: &str = "Get your lunch hour back";
/// Paragraph under the closing heading.
pub const CLOSING_LEAD: &str = "Join thousands of Singaporeans who save time every day with QNom.";
/// The closing call to action.
pub const CLOSING_ACTIONS: &[&str] = &["Start Using QNom Free"];
/// Small print under the closing button.
pub const CLOSING_NOTE: &str = "No app download required. Works on any device.";

const _: () = assert!(NAV_LINKS.len() == NAV_LINK_COUNT);
const _: () = assert!(FOOTER_COLUMNS.len() == FOOTER_COLUMN_COUNT);
const _: () = assert!(FEATURES.len() == FEATURE_COUNT);
const _: () = assert!(STATS.len() == STAT_COUNT);
const _: () = assert!(HERO_ACTIONS.len() == HERO_ACTION_COUNT);
const _: () = assert!(CLOSING_ACTIONS.len() == CLOSING_ACTION_COUNT);

/// The full set of literal lists, bundled so they can be checked as one unit.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SiteContent {
    /// Header navigation links
    pub nav_links: &'static [Link],
    /// Titled footer columns
    pub footer_columns: &'static [FooterColumn],
    /// Feature cards
    pub features: &'static [Feature],
    /// Stat entries
    pub stats: &'static [Stat],
    /// Hero button labels
    pub hero_actions: &'static [&'static str],
    /// Closing button labels
    pub closing_actions: &'static [&'static str],
}

impl SiteContent {
    /// The content rendered by this crate.
    pub const QNOM: SiteContent = SiteContent {
        nav_links: NAV_LINKS,
        footer_columns: FOOTER_COLUMNS,
        features: FEATURES,
        stats: STATS,
        hero_actions: HERO_ACTIONS,
        closing_actions: CLOSING_ACTIONS,
    };

    /// Every route a link on the page points at, sorted and de-duplicated.
    pub fn destinations(&self) -> Vec<&'static str> {
        let mut routes: Vec<&'static str> = std::iter::once(BRAND_HREF)
            .chain(self.nav_links.iter().map(|l| l.href))
            .chain(
                self.footer_columns
                    .iter()
                    .flat_map(|c| c.links.iter().map(|l| l.href)),
            )
            .collect();
        routes.sort_unstable();
        routes.dedup();
        routes
    }
}
