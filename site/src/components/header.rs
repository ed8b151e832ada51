//! Sticky site header: brand mark, navigation links and the sign-in action.

use leptos::prelude::*;

use super::{Button, ButtonSize};
use crate::content::{BRAND, BRAND_HREF, NAV_LINKS, SIGN_IN_LABEL};

/// Sticky header with the brand link, navigation and the sign-in action.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container site-header-inner">
                <a href=BRAND_HREF class="nav-brand">
                    <span class="text-gradient">{BRAND}</span>
                </a>
                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
                        .collect::<Vec<_>>()}
                    <Button size=ButtonSize::Sm class="nav-cta">
                        {SIGN_IN_LABEL}
                    </Button>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn render() -> String {
        view! { <SiteHeader /> }.to_html()
    }

    #[test]
    fn brand_links_home() {
        let html = render();
        assert_eq!(html.matches(r#"class="nav-brand""#).count(), 1);
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains("QNom"));
    }

    #[test]
    fn three_nav_links_then_sign_in() {
        let html = render();
        assert_eq!(html.matches(r#"class="nav-link""#).count(), 3);
        assert_eq!(html.matches("<button").count(), 1);

        let positions: Vec<usize> = ["Discover", "For Partners", "About", "Sign In"]
            .iter()
            .map(|label| html.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn nav_targets() {
        let html = render();
        for href in ["/discover", "/partners", "/about"] {
            assert!(html.contains(&format!(r#"href="{}""#, href)), "missing {}", href);
        }
    }
}
