//! Platform roles and where each one's dashboard lives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a user does on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Creator,
    Donor,
}

/// A navigation target: path plus visible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl Role {
    /// Roles a visitor may pick when registering.
    pub const SELECTABLE: [Role; 2] = [Role::Creator, Role::Donor];

    /// Lower-case name, as shown on the role card.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Creator => "creator",
            Self::Donor => "donor",
        }
    }

    /// One-line pitch shown under the role name. Only roles offered at
    /// registration have one.
    #[must_use]
    pub fn tagline(self) -> Option<&'static str> {
        match self {
            Self::Admin => None,
            Self::Creator => Some("Launch and manage campaigns"),
            Self::Donor => Some("Support amazing projects"),
        }
    }

    /// The dashboard this role lands on.
    #[must_use]
    pub fn dashboard_link(self) -> NavLink {
        match self {
            Self::Admin => NavLink {
                href: "/admin",
                label: "Admin Dashboard",
            },
            Self::Creator => NavLink {
                href: "/creator",
                label: "Creator Dashboard",
            },
            Self::Donor => NavLink {
                href: "/donor",
                label: "Donor Dashboard",
            },
        }
    }
}

/// Dashboard link for an optional role; visitors without one go home.
#[must_use]
pub fn dashboard_link(role: Option<Role>) -> NavLink {
    role.map_or(
        NavLink {
            href: "/",
            label: "Home",
        },
        Role::dashboard_link,
    )
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
