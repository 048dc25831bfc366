//! One figure in the campaign stats strip.

use leptos::prelude::*;

/// A formatted value over its caption, e.g. `$24,000` over "Raised".
#[component]
pub fn StatCard(
    /// Caption shown below the value.
    #[prop(into)]
    label: String,
    /// Already formatted value.
    #[prop(into)]
    value: String,
    /// Colour modifier (`stat-raised`, `stat-funded`, ...).
    #[prop(optional)]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {accent}")>
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
