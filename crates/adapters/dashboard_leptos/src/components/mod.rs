mod campaign_card;
mod category_badge;
mod loading;
mod navbar;
mod password_strength;
mod progress_bar;
mod role_card;
mod stat_card;
mod toast;

pub use campaign_card::CampaignCard;
pub use category_badge::CategoryBadge;
pub use loading::Loading;
pub use navbar::Navbar;
pub use password_strength::PasswordStrengthMeter;
pub use progress_bar::ProgressBar;
pub use role_card::RoleCard;
pub use stat_card::StatCard;
pub use toast::{ToastContainer, use_toasts};
