//! Home page: hero with feature cards, stats, closing call to action.
use leptos::prelude::*;

use super::{ClosingCta, FeatureCards, Hero, Stats};

/// Body of the landing page.
#[component]
pub fn HomeContent() -> impl IntoView {
    view! {
        <main class="home">
            <section class="hero">
                <div class="hero-inner">
                    <Hero />
                    <FeatureCards />
                </div>
            </section>
            <Stats />
            <ClosingCta />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn sections_in_fixed_order() {
        let html = view! { <HomeContent /> }.to_html();
        let order: Vec<usize> = [
            r#"class="hero-content""#,
            r#"class="features-grid""#,
            r#"class="stats""#,
            r#"class="closing""#,
        ]
        .iter()
        .map(|marker| html.find(marker).unwrap())
        .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn three_calls_to_action_in_body() {
        let html = view! { <HomeContent /> }.to_html();
        assert_eq!(html.matches("<button").count(), 3);
    }
}
