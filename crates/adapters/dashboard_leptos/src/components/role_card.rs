use crowdfund_domain::role::Role;
use leptos::prelude::*;

/// Selectable card for picking a role at registration.
#[component]
pub fn RoleCard(
    role: Role,
    /// Whether this card is the current choice.
    #[prop(into)]
    selected: Signal<bool>,
    on_select: Callback<Role>,
) -> impl IntoView {
    let icon = match role {
        Role::Creator => "\u{26A1}",
        _ => "\u{1F465}",
    };

    view! {
        <button
            type="button"
            class="role-card"
            class:selected=move || selected.get()
            aria-pressed=move || selected.get().to_string()
            on:click=move |_| on_select.run(role)
        >
            <span class=format!("role-icon role-icon-{}", role.name())>{icon}</span>
            <span class="role-text">
                <span class="role-name">{role.name()}</span>
                <span class="role-tagline">{role.tagline()}</span>
            </span>
        </button>
    }
}
