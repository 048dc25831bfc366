use leptos::prelude::*;

/// Inline style for a bar filled to `percentage`, clamped to `[0, 100]`.
pub fn width_style(percentage: f64) -> String {
    let pct = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("width: {pct}%")
}

/// Horizontal progress bar.
#[component]
pub fn ProgressBar(
    /// Fill level in percent.
    percentage: f64,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("progress {class}")>
            <div class="progress-fill" style=width_style(percentage)></div>
        </div>
    }
}
