//! Toast notifications for data-source failures.

use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 5000;

#[derive(Debug, Clone)]
pub struct ToastMessage {
    /// Key for list rendering.
    pub id: u32,
    pub text: String,
}

/// Handle for pushing toasts, provided by [`ToastContainer`].
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<ToastMessage>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    /// Show an error toast that dismisses itself after five seconds.
    pub fn error(&self, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.list.update(|list| {
            list.push(ToastMessage {
                id,
                text: text.into(),
            });
        });

        let toasts = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            toasts.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.list.update(|list| list.retain(|t| t.id != id));
    }
}

/// The toast handle, if a [`ToastContainer`] is mounted above.
pub fn use_toasts() -> Option<Toasts> {
    use_context::<Toasts>()
}

/// Provides [`Toasts`] to `children` and renders the active messages.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let toasts = Toasts {
        list: RwSignal::new(Vec::new()),
        next_id: RwSignal::new(0),
    };
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || toasts.list.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast toast-error">
                            <button class="toast-dismiss" on:click=move |_| toasts.dismiss(id)>
                                "\u{00D7}"
                            </button>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
