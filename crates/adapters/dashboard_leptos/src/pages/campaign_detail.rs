//! Campaign detail page: fetch by route id, then render the derived metrics
//! and the donation sidebar.

use crowdfund_domain::campaign::Campaign;
use crowdfund_domain::donation::{DonationAmount, can_donate};
use crowdfund_domain::funding::{CampaignStatus, FundingSnapshot};
use crowdfund_domain::money::format_usd;
use crowdfund_domain::time::{self, short_date};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::ApiError;
use crate::components::{CategoryBadge, Loading, ProgressBar, StatCard};
use crate::links;
use crate::source::use_campaign_source;

/// The four figures of the stats strip: label, value, accent class.
pub fn stat_items(snapshot: &FundingSnapshot) -> [(&'static str, String, &'static str); 4] {
    [
        ("Raised", format_usd(snapshot.raised), "stat-raised"),
        ("Goal", format_usd(snapshot.goal), "stat-goal"),
        ("Funded", format!("{}%", snapshot.percentage_label()), "stat-funded"),
        ("Days Left", snapshot.days_remaining.to_string(), "stat-days"),
    ]
}

/// Heading of the error state.
pub fn error_heading(err: &ApiError) -> &'static str {
    if err.not_found {
        "Campaign Not Found"
    } else {
        "Could Not Load Campaign"
    }
}

/// The line logged by the donate placeholder.
pub fn donation_intent(amount: DonationAmount, campaign: &Campaign) -> String {
    format!("Donating ${amount} to campaign {}", campaign.id)
}

#[component]
pub fn CampaignDetail() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();
    let source = use_campaign_source();

    let campaign = LocalResource::new(move || {
        let source = source.clone();
        let campaign_id = id();
        async move { source.campaign(&campaign_id).await }
    });

    view! {
        <div class="page campaign-detail">
            <Suspense fallback=move || view! { <Loading message="Loading campaign..."/> }>
                {move || {
                    campaign.read().as_ref().map(|result| match result {
                        Ok(found) => view! {
                            <BackToListing label="\u{2190} Back to All Campaigns" class="btn btn-link back"/>
                            <CampaignBody campaign=found.clone()/>
                        }
                        .into_any(),
                        Err(err) => {
                            leptos::logging::warn!("error fetching campaign: {err}");
                            view! {
                                <div class="error-state">
                                    <div class="error-icon" aria-hidden="true">"\u{26A0}"</div>
                                    <h3>{error_heading(err)}</h3>
                                    <p class="muted">{err.to_string()}</p>
                                    <BackToListing label="Back to Campaigns" class="btn btn-primary"/>
                                </div>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Button returning to `/all-campaigns`.
#[component]
fn BackToListing(label: &'static str, class: &'static str) -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <button class=class on:click=move |_| navigate(links::LISTING, NavigateOptions::default())>
            {label}
        </button>
    }
}

#[component]
fn CampaignBody(campaign: Campaign) -> impl IntoView {
    let snapshot = campaign.snapshot(time::now());

    let stats = stat_items(&snapshot)
        .into_iter()
        .map(|(label, value, accent)| view! { <StatCard label=label value=value accent=accent/> })
        .collect_view();

    let media = match campaign.image.clone() {
        Some(src) => view! { <img src=src alt=campaign.title.clone()/> }.into_any(),
        None => view! { <div class="image-placeholder"></div> }.into_any(),
    };

    view! {
        <div class="detail-grid">
            <div class="detail-main">
                <div class="detail-media">
                    {media}
                    <CategoryBadge category=campaign.category/>
                </div>

                <h1>{campaign.title.clone()}</h1>
                <p class="lead">{campaign.short_description.clone()}</p>
                <div class="prose">
                    <p>{campaign.long_description.clone()}</p>
                </div>

                <div class="card stats">{stats}</div>

                <div class="card">
                    <h3>"Campaign Details"</h3>
                    <ul class="meta">
                        <li>{format!("Started on {}", short_date(campaign.start_date))}</li>
                        <li>{format!("Ends on {}", short_date(campaign.end_date))}</li>
                        <li>{format!("Created by {}", campaign.creator_id)}</li>
                    </ul>
                </div>
            </div>

            <aside class="detail-sidebar card">
                <div class="progress-header">
                    <span>"Progress"</span>
                    <span class="accent">{format!("{}%", snapshot.percentage_label())}</span>
                </div>
                <ProgressBar percentage=snapshot.percentage class="progress-lg"/>

                <div class="funding-info">
                    <div class="amount">{format_usd(snapshot.raised)}</div>
                    <div class="muted">{format!("raised of {} goal", format_usd(snapshot.goal))}</div>
                </div>

                <DonationPanel campaign=campaign.clone() status=snapshot.status/>

                <div class="secondary-actions">
                    <button class="btn btn-outline" type="button">"\u{1F517} Share"</button>
                    <button class="btn btn-outline" type="button">"\u{2661} Follow"</button>
                </div>
            </aside>
        </div>
    }
}

/// Class suffix, heading and detail for a campaign that no longer takes
/// donations.
fn closed_notice(status: CampaignStatus) -> (&'static str, &'static str, &'static str) {
    if status == CampaignStatus::Funded {
        ("funded", "\u{1F3AF} Campaign Funded!", "This campaign has reached its goal.")
    } else {
        ("ended", "Campaign Ended", "This campaign is no longer accepting donations.")
    }
}

#[component]
fn DonationPanel(campaign: Campaign, status: CampaignStatus) -> impl IntoView {
    if !status.accepts_donations() {
        let (class, heading, detail) = closed_notice(status);
        return view! {
            <div class=format!("campaign-closed {class}")>
                <strong>{heading}</strong>
                <p class="muted">{detail}</p>
            </div>
        }
        .into_any();
    }

    let (amount, set_amount) = signal(String::new());
    let donate = move |_| {
        if let Some(value) = DonationAmount::parse(&amount.get_untracked()) {
            leptos::logging::log!("{}", donation_intent(value, &campaign));
        }
    };
    view! {
        <label class="field">
            <span>"Donation Amount"</span>
            <span class="currency-input">
                <span class="currency-symbol">"$"</span>
                <input
                    type="number"
                    min="1"
                    placeholder="Enter amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
            </span>
        </label>
        <button
            class="btn btn-primary btn-block"
            disabled=move || !can_donate(&amount.get())
            on:click=donate
        >
            "Donate Now"
        </button>
    }
    .into_any()
}
