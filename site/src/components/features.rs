use leptos::prelude::*;

use super::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::content::{FEATURES, Feature};

/// The value-proposition cards.
#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <div class="features-grid">
            {FEATURES
                .iter()
                .map(|feature| view! { <FeatureCard feature=*feature /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <Card class="shadow-qnom">
            <CardHeader>
                <CardTitle>
                    <span class="card-icon">{feature.icon}</span>
                    {feature.title}
                </CardTitle>
                <CardDescription>{feature.description}</CardDescription>
            </CardHeader>
            <CardContent>
                <p class="card-body">{feature.body}</p>
            </CardContent>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_three_complete_cards() {
        let html = view! { <FeatureCards /> }.to_html();
        assert_eq!(html.matches("<article").count(), 3);
        assert_eq!(html.matches(r#"class="card-icon""#).count(), 3);
        assert_eq!(html.matches(r#"class="card-description""#).count(), 3);
        assert_eq!(html.matches(r#"class="card-body""#).count(), 3);
    }

    #[test]
    fn cards_in_order() {
        let html = view! { <FeatureCards /> }.to_html();
        let queues = html.find("Real-Time Queues").unwrap();
        let recs = html.find("Smart Recommendations").unwrap();
        let free = html.find("Forever Free").unwrap();
        assert!(queues < recs && recs < free);
        assert!(html.contains("⏱️"));
        assert!(html.contains("🍜"));
        assert!(html.contains("💰"));
    }
}
