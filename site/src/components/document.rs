//! Root document component - the page shell.
//!
//! Emits `<html>`, the `<head>` with all page metadata, and wraps the page
//! content between [`SiteHeader`] and [`SiteFooter`].

use leptos::html::meta;
use leptos::prelude::*;

use super::{SiteFooter, SiteHeader};
use crate::content::{FONT_STYLESHEET, METADATA, SiteMetadata};
use crate::styles::SITE_CSS;

/// Persistent page chrome around any page content.
#[component]
pub fn Shell(
    /// Page content placed between header and footer
    children: Children,
) -> impl IntoView {
    view! {
        <html lang=METADATA.lang>
            <DocumentHead metadata=METADATA />
            <body>
                <SiteHeader />
                {children()}
                <SiteFooter />
            </body>
        </html>
    }
}

/// `<head>`: title, description, keywords, authors, Open Graph, font and CSS.
#[component]
pub fn DocumentHead(
    /// Values emitted as `<meta>` tags
    metadata: SiteMetadata,
) -> impl IntoView {
    let og = metadata.open_graph;

    view! {
        <head>
            <meta charset="UTF-8" />
            <meta name="viewport" content="width=device-width, initial-scale=1" />
            <title>{metadata.title}</title>
            <meta name="description" content=metadata.description />
            <meta name="keywords" content=metadata.keywords_content() />
            {metadata
                .authors
                .iter()
                .map(|author| view! { <meta name="author" content=*author /> })
                .collect::<Vec<_>>()}

            // tachys has no typed `property` attribute, so Open Graph tags go through `attr`
            {meta().attr("property", "og:title").content(og.title)}
            {meta().attr("property", "og:description").content(og.description)}
            {meta().attr("property", "og:url").content(og.url)}
            {meta().attr("property", "og:site_name").content(og.site_name)}
            {og.images
                .iter()
                .map(|image| {
                    (
                        meta().attr("property", "og:image").content(image.url),
                        meta().attr("property", "og:image:width").content(image.width.to_string()),
                        meta().attr("property", "og:image:height").content(image.height.to_string()),
                    )
                })
                .collect::<Vec<_>>()}
            {meta().attr("property", "og:locale").content(og.locale)}
            {meta().attr("property", "og:type").content(og.kind)}

            <link rel="preconnect" href="https://fonts.googleapis.com" />
            <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="" />
            <link rel="stylesheet" href=FONT_STYLESHEET />
            <style>{SITE_CSS}</style>
        </head>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn head() -> String {
        view! { <DocumentHead metadata=METADATA /> }.to_html()
    }

    #[test]
    fn head_carries_title_and_description() {
        let html = head();
        assert!(html.contains("<title>QNom - Skip the Queue, Find Food Fast</title>"));
        assert!(html.contains("Save 30+ minutes daily with live wait times."));
        assert!(html.contains(
            "singapore food, hawker center, queue time, real-time, food discovery"
        ));
        assert!(html.contains(r#"content="QNom Team""#));
    }

    #[test]
    fn head_carries_open_graph() {
        let html = head();
        for (property, content) in [
            ("og:title", "QNom - Skip the Queue, Find Food Fast"),
            (
                "og:description",
                "Real-time queue tracking for Singapore hawker centers",
            ),
            ("og:url", "https://qnom.app"),
            ("og:site_name", "QNom"),
            ("og:image", "https://qnom.app/og-image.png"),
            ("og:image:width", "1200"),
            ("og:image:height", "630"),
            ("og:locale", "en_SG"),
            ("og:type", "website"),
        ] {
            let tag = format!(r#"property="{}" content="{}""#, property, content);
            assert!(html.contains(&tag), "missing {}", tag);
        }
    }

    #[test]
    fn open_graph_tags_follow_page_metadata() {
        let html = head();
        let title = html.find("<title>").unwrap();
        let og_title = html.find(r#"property="og:title""#).unwrap();
        let og_type = html.find(r#"property="og:type""#).unwrap();
        let stylesheet = html.find("<style>").unwrap();
        assert!(title < og_title && og_title < og_type && og_type < stylesheet);
        assert_eq!(html.matches(r#"<meta property="og:"#).count(), 9);
    }

    #[test]
    fn head_loads_inter_and_styles() {
        let html = head();
        assert!(html.contains("family=Inter"));
        assert!(html.contains(".text-gradient"));
    }

    #[test]
    fn shell_places_children_between_header_and_footer() {
        let html = view! {
            <Shell>
                <p class="probe">"page body"</p>
            </Shell>
        }
        .to_html();

        assert!(html.starts_with("<html"));
        assert!(html.contains(r#"lang="en""#));
        let header = html.find("<header").unwrap();
        let probe = html.find("page body").unwrap();
        let footer = html.find("<footer").unwrap();
        assert!(header < probe && probe < footer);
    }
}
