use crowdfund_domain::campaign::Category;
use leptos::prelude::*;

/// Pill showing the campaign category in its badge colour.
#[component]
pub fn CategoryBadge(category: Category) -> impl IntoView {
    view! {
        <span class=format!("badge {}", category.badge_style())>{category.label()}</span>
    }
}
