//! Registration form: role choice and password strength. Nothing is submitted.

use crowdfund_domain::password::PasswordStrength;
use crowdfund_domain::role::Role;
use leptos::prelude::*;

use crate::components::{PasswordStrengthMeter, RoleCard};

/// Console line for the placeholder submit. Carries no personal details.
fn registration_intent(role: Role, password: &str) -> String {
    let level = PasswordStrength::evaluate(password).level();
    format!("Registering as {role}, password {}", level.label())
}

#[component]
pub fn Register() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let role = RwSignal::new(Role::Donor);

    let on_select = Callback::new(move |choice: Role| role.set(choice));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!(
            "{}",
            registration_intent(role.get_untracked(), &password.get_untracked())
        );
    };

    let role_cards = Role::SELECTABLE
        .into_iter()
        .map(|choice| {
            view! {
                <RoleCard
                    role=choice
                    selected=Signal::derive(move || role.get() == choice)
                    on_select=on_select
                />
            }
        })
        .collect_view();

    view! {
        <div class="page register">
            <form class="card auth-card" on:submit=on_submit>
                <h1>"Create your account"</h1>
                <p class="muted">"Choose how you want to take part."</p>

                <div class="role-cards">{role_cards}</div>

                <label class="field">
                    <span>"Full name"</span>
                    <input
                        type="text"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Password"</span>
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <PasswordStrengthMeter password=password/>

                <button class="btn btn-primary btn-block" type="submit">"Create Account"</button>
                <p class="muted">"Already have an account? " <a href="/login">"Login"</a></p>
            </form>
        </div>
    }
}
