use leptos::prelude::*;

use super::{Button, ButtonSize};
use crate::content::{CLOSING_ACTIONS, CLOSING_LEAD, CLOSING_NOTE, CLOSING_TITLE};

/// Closing call to action at the bottom of the home page.
#[component]
pub fn ClosingCta() -> impl IntoView {
    view! {
        <section class="closing">
            <div class="closing-inner">
                <h2 class="section-title">{CLOSING_TITLE}</h2>
                <p class="closing-lead">{CLOSING_LEAD}</p>
                <div class="closing-actions">
                    <Button size=ButtonSize::Lg class="shadow-qnom">
                        {CLOSING_ACTIONS[0]}
                    </Button>
                </div>
                <p class="closing-note">{CLOSING_NOTE}</p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_call_to_action() {
        let html = view! { <ClosingCta /> }.to_html();
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains("Start Using QNom Free"));
        assert!(html.contains("Get your lunch hour back"));
        assert!(html.contains("No app download required. Works on any device."));
    }
}
