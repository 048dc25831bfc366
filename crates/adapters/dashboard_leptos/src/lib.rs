//! # crowdfund-dashboard
//!
//! Leptos CSR front end. Pages read campaigns through [`source::CampaignSource`],
//! which is either the in-process mock set or the crowdfundd API depending on
//! `dashboard.toml`.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
pub mod config;
mod links;
mod pages;
pub mod session;
pub mod source;

use components::{Navbar, ToastContainer};
use config::DashboardConfig;
use pages::{AllCampaigns, CampaignDetail, Home, NotFound, Register};
use source::CampaignSource;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::embedded();
    provide_context(CampaignSource::from_config(&config));
    provide_context(config);
    session::provide_session();

    view! {
        <ToastContainer>
            <Router>
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Home/>
                        <Route path=path!("all-campaigns") view=AllCampaigns/>
                        <Route path=path!("campaigns/:id") view=CampaignDetail/>
                        <Route path=path!("register") view=Register/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
