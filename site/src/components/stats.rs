use leptos::prelude::*;

use crate::content::{STATS, STATS_TITLE};

/// Stats section: heading and the headline numbers.
#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container">
                <h2 class="section-title">{STATS_TITLE}</h2>
                <div class="stats-grid">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat">
                                    <p class="stat-value">{stat.value}</p>
                                    <p class="stat-caption">{stat.caption}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
