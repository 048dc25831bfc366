//! The user shown in the navigation bar.
//!
//! There is no session storage; the dashboard provides a mock user.

use serde::{Deserialize, Serialize};

use crate::role::{self, NavLink, Role};

/// Who is browsing, as far as the UI is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub role: Option<Role>,
    pub avatar_url: Option<String>,
    pub logged_in: bool,
}

impl SessionUser {
    /// A signed-out visitor.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            name: String::new(),
            role: None,
            avatar_url: None,
            logged_in: false,
        }
    }

    /// The demo user the UI runs with.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            name: "John Doe".to_string(),
            role: Some(Role::Creator),
            avatar_url: None,
            logged_in: true,
        }
    }

    /// Upper-cased first letter of every name part (`"John Doe"` → `"JD"`).
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    /// Name to show in the account menu.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "User"
        } else {
            &self.name
        }
    }

    /// Where the navbar's dashboard link points.
    #[must_use]
    pub fn dashboard_link(&self) -> NavLink {
        role::dashboard_link(self.role)
    }
}

/// Upper-cased first letter of every whitespace-separated part of `name`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_take_first_letter_of_each_part() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("ava  de la cruz"), "ADLC");
    }

    #[test]
    fn should_return_empty_initials_for_blank_name() {
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn should_link_demo_user_to_creator_dashboard() {
        let user = SessionUser::demo();
        assert!(user.logged_in);
        assert_eq!(user.initials(), "JD");
        assert_eq!(user.dashboard_link().href, "/creator");
    }

    #[test]
    fn should_fall_back_to_generic_display_name() {
        let user = SessionUser::anonymous();
        assert_eq!(user.display_name(), "User");
        assert_eq!(user.dashboard_link().href, "/");
    }
}
