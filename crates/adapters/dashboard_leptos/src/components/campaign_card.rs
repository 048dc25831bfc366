//! Campaign summary card used by the listing and the home page.

use crowdfund_domain::campaign::Campaign;
use crowdfund_domain::funding::CampaignStatus;
use crowdfund_domain::money::format_usd;
use crowdfund_domain::time::Timestamp;
use leptos::prelude::*;

use super::{CategoryBadge, ProgressBar};
use crate::links;

/// Footer text next to the percentage: days left, or the final state.
pub fn time_left_label(status: CampaignStatus, days_remaining: u32) -> String {
    match status {
        CampaignStatus::Funded => "Funded".to_string(),
        CampaignStatus::Ended => "Ended".to_string(),
        CampaignStatus::Active if days_remaining == 1 => "1 day left".to_string(),
        CampaignStatus::Active => format!("{days_remaining} days left"),
    }
}

#[component]
pub fn CampaignCard(campaign: Campaign, now: Timestamp) -> impl IntoView {
    let snapshot = campaign.snapshot(now);
    let href = links::campaign_href(&campaign.id);
    let image = campaign.image.clone().unwrap_or_default();

    view! {
        <article class="campaign-card">
            <div class="campaign-card-media">
                <img src=image alt=campaign.title.clone() loading="lazy"/>
                <CategoryBadge category=campaign.category/>
            </div>
            <div class="campaign-card-body">
                <h3>{campaign.title.clone()}</h3>
                <p class="muted">{campaign.short_description.clone()}</p>
                <p class="campaign-card-amounts">
                    <strong>{format_usd(snapshot.raised)}</strong>
                    " raised of "
                    {format_usd(snapshot.goal)}
                </p>
                <ProgressBar percentage=snapshot.percentage/>
                <div class="campaign-card-footer">
                    <span>{format!("{}% funded", snapshot.percentage_label())}</span>
                    <span class="muted">{time_left_label(snapshot.status, snapshot.days_remaining)}</span>
                </div>
                <a class="btn btn-outline" href=href>"Details"</a>
            </div>
        </article>
    }
}
