//! Small UI primitives shared by the page sections: buttons and cards.

use leptos::prelude::*;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid orange
    #[default]
    Default,
    /// Transparent until hovered
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Height and padding of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Compact, used in the header
    Sm,
    /// Regular
    #[default]
    Default,
    /// Large, used for page calls to action
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-size-sm",
            ButtonSize::Default => "btn-size-default",
            ButtonSize::Lg => "btn-size-lg",
        }
    }
}

fn join_classes(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

/// Full class list for a button, e.g. `"btn btn-ghost btn-size-lg"`.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let base = format!("btn {} {}", variant.class(), size.class());
    join_classes(&base, extra)
}

/// A call-to-action button.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Button size=ButtonSize::Lg class="shadow-qnom">"Find Food Now"</Button> }
/// ```
#[component]
pub fn Button(
    /// Visual style
    #[prop(optional)]
    variant: ButtonVariant,
    /// Height and padding
    #[prop(optional)]
    size: ButtonSize,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    /// Button label
    children: Children,
) -> impl IntoView {
    let classes = button_class(variant, size, class);
    view! {
        <button type="button" class=classes>
            {children()}
        </button>
    }
}

/// Bordered card container.
#[component]
pub fn Card(
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    /// Card sections
    children: Children,
) -> impl IntoView {
    let classes = join_classes("card", class);
    view! { <article class=classes>{children()}</article> }
}

/// Title and description area of a [`Card`].
#[component]
pub fn CardHeader(
    /// Header content
    children: Children,
) -> impl IntoView {
    view! { <div class="card-header">{children()}</div> }
}

/// Card heading.
#[component]
pub fn CardTitle(
    /// Title content
    children: Children,
) -> impl IntoView {
    view! { <h3 class="card-title">{children()}</h3> }
}

/// Muted one-line summary under a [`CardTitle`].
#[component]
pub fn CardDescription(
    /// Summary text
    children: Children,
) -> impl IntoView {
    view! { <p class="card-description">{children()}</p> }
}

/// Body area of a [`Card`].
#[component]
pub fn CardContent(
    /// Body content
    children: Children,
) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}
