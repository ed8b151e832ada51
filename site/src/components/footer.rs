//! Site footer: brand column, three link columns and the copyright line.

use leptos::prelude::*;

use crate::content::{BRAND, BRAND_TAGLINE, COPYRIGHT, FOOTER_COLUMNS, FooterColumn};

/// Footer with the brand column, link columns and copyright line.
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container site-footer-inner">
                <div class="footer-grid">
                    <div class="footer-column">
                        <h3 class="footer-brand text-gradient">{BRAND}</h3>
                        <p class="footer-tagline">{BRAND_TAGLINE}</p>
                    </div>
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| view! { <FooterLinks column=*column /> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="footer-copyright">
                    <p>{COPYRIGHT}</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterLinks(column: FooterColumn) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">{column.heading}</h4>
            <ul class="footer-links">
                {column
                    .links
                    .iter()
                    .map(|link| view! { <li><a href=link.href class="footer-link">{link.label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
