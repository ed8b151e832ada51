use leptos::prelude::*;

use super::{Button, ButtonSize, ButtonVariant};
use crate::content::{HERO_ACTIONS, HERO_LEAD, HERO_TITLE, HERO_TITLE_ACCENT};

/// Headline, lead paragraph and the two hero calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero-content">
            <h1 class="hero-title">
                {HERO_TITLE}
                <span class="text-gradient">{HERO_TITLE_ACCENT}</span>
            </h1>
            <p class="hero-lead">{HERO_LEAD}</p>
            <div class="hero-actions">
                <Button size=ButtonSize::Lg class="shadow-qnom">
                    {HERO_ACTIONS[0]}
                </Button>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Lg>
                    {HERO_ACTIONS[1]}
                </Button>
            </div>
        </div>
    }
}
