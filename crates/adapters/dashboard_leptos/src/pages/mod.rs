mod campaign_detail;
mod campaigns;
mod home;
mod not_found;
mod register;

pub use campaign_detail::CampaignDetail;
pub use campaigns::AllCampaigns;
pub use home::Home;
pub use not_found::NotFound;
pub use register::Register;
