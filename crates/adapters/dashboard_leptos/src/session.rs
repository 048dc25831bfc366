//! Mock session: the signed-in user shown in the navbar.

use crowdfund_domain::user::SessionUser;
use leptos::prelude::*;

/// Provide the demo user to the component tree.
pub fn provide_session() {
    provide_context(RwSignal::new(SessionUser::demo()));
}

/// The current session user, or an anonymous visitor when none is provided.
pub fn use_session() -> RwSignal<SessionUser> {
    use_context::<RwSignal<SessionUser>>().unwrap_or_else(|| RwSignal::new(SessionUser::anonymous()))
}
