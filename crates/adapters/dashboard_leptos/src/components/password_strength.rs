//! Password strength meter shown under the registration password field.

use crowdfund_domain::password::PasswordStrength;
use leptos::prelude::*;

use super::progress_bar::width_style;

/// Strength bar plus the checklist of individual rules.
#[component]
pub fn PasswordStrengthMeter(
    /// The password as typed.
    #[prop(into)]
    password: Signal<String>,
) -> impl IntoView {
    let strength = Memo::new(move |_| PasswordStrength::evaluate(&password.get()));

    view! {
        <div class="password-strength">
            <div class="password-strength-meter">
                <span class="muted">"Password strength: "</span>
                <div class="progress">
                    <div
                        class=move || format!("progress-fill {}", strength.read().level().css_class())
                        style=move || width_style(strength.read().score() * 100.0)
                    ></div>
                </div>
                <span class="password-strength-level">{move || strength.read().level().label()}</span>
            </div>
            <ul class="password-checks">
                {move || {
                    strength
                        .read()
                        .checks()
                        .iter()
                        .map(|(rule, ok)| {
                            let class = if *ok { "check check-ok" } else { "check" };
                            let mark = if *ok { "\u{2713}" } else { "\u{2022}" };
                            view! {
                                <li class=class>
                                    <span class="check-mark">{mark}</span>
                                    {rule.label()}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
