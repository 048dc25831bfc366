//! `/all-campaigns`: filterable, paged campaign listing.

use crowdfund_domain::campaign::{Campaign, Category};
use crowdfund_domain::funding::CampaignStatus;
use crowdfund_domain::query::CampaignQuery;
use crowdfund_domain::time;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::{CampaignCard, Loading, use_toasts};
use crate::config::DashboardConfig;
use crate::links;
use crate::source::use_campaign_source;

const QUERY_KEYS: [&str; 4] = ["category", "q", "status", "page"];

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub campaigns: Vec<Campaign>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl ListingPage {
    /// Cut page `page` (1-based) of `page_size` out of the full match list.
    ///
    /// Pages past the end are clamped to the last page.
    pub fn new(matches: Vec<Campaign>, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total = matches.len();
        let total_pages = total.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);
        let campaigns = matches
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();
        Self {
            campaigns,
            page,
            total_pages,
            total,
        }
    }
}

/// Read the listing filters out of the URL query.
///
/// The page is kept aside: filtering runs on the whole set so the page count
/// is known.
pub fn listing_filters(get: impl Fn(&str) -> Option<String>) -> (CampaignQuery, usize) {
    let pairs = QUERY_KEYS
        .iter()
        .filter_map(|key| get(key).map(|value| (*key, value)));
    let mut query = CampaignQuery::from_pairs(pairs);
    let page = query.page.take().unwrap_or(1);
    query.per_page = None;
    (query, page)
}

fn heading(query: &CampaignQuery) -> String {
    match (query.category, &query.search) {
        (Some(category), _) => format!("{} Campaigns", category.label()),
        (None, Some(search)) => format!("Results for \u{201C}{search}\u{201D}"),
        (None, None) => "All Campaigns".to_string(),
    }
}

#[component]
pub fn AllCampaigns() -> impl IntoView {
    let page_size = use_context::<DashboardConfig>().unwrap_or_default().page_size;
    let source = use_campaign_source();
    let toasts = use_toasts();
    let query_map = use_query_map();
    let filters = Memo::new(move |_| {
        let map = query_map.read();
        listing_filters(|key| map.get(key))
    });

    let listing = LocalResource::new(move || {
        let source = source.clone();
        let (query, page) = filters.get();
        async move {
            source
                .campaigns(&query)
                .await
                .map(|matches| ListingPage::new(matches, page, page_size))
        }
    });

    Effect::new(move |_| {
        if let (Some(toasts), Some(Err(err))) = (toasts, listing.read().as_ref()) {
            toasts.error(format!("Failed to load campaigns: {err}"));
        }
    });

    let status_links = move || {
        let (query, _) = filters.get();
        let all = CampaignQuery {
            status: None,
            ..query.clone()
        };
        let mut items = vec![("All", links::listing_href(&all), query.status.is_none())];
        for status in [CampaignStatus::Active, CampaignStatus::Funded, CampaignStatus::Ended] {
            let filtered = CampaignQuery {
                status: Some(status),
                ..query.clone()
            };
            let label = match status {
                CampaignStatus::Active => "Active",
                CampaignStatus::Funded => "Funded",
                CampaignStatus::Ended => "Ended",
            };
            items.push((label, links::listing_href(&filtered), query.status == Some(status)));
        }
        items
            .into_iter()
            .map(|(label, href, active)| {
                view! { <a class="chip" class:active=active href=href>{label}</a> }
            })
            .collect_view()
    };

    let category_links = move || {
        let (query, _) = filters.get();
        Category::ALL
            .into_iter()
            .map(|category| {
                let active = query.category == Some(category);
                view! {
                    <a class="chip" class:active=active href=links::category_href(category)>
                        {category.label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page listing">
            <h1>{move || heading(&filters.get().0)}</h1>
            <div class="filters">
                <div class="chips">{status_links}</div>
                <div class="chips">{category_links}</div>
            </div>
            <Suspense fallback=move || view! { <Loading message="Loading campaigns\u{2026}"/> }>
                {move || {
                    listing.read().as_ref().map(|result| match result {
                        Ok(listing) if listing.campaigns.is_empty() => view! {
                            <p class="muted empty">"No campaigns found."</p>
                        }.into_any(),
                        Ok(listing) => {
                            let now = time::now();
                            let (query, _) = filters.get_untracked();
                            view! {
                                <p class="muted">{format!("{} campaigns", listing.total)}</p>
                                <div class="campaign-grid">
                                    {listing
                                        .campaigns
                                        .iter()
                                        .cloned()
                                        .map(|campaign| view! { <CampaignCard campaign=campaign now=now/> })
                                        .collect_view()}
                                </div>
                                <Pager query=query page=listing.page total_pages=listing.total_pages/>
                            }.into_any()
                        }
                        Err(err) => view! {
                            <p class="error">{"Failed to load campaigns: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn Pager(query: CampaignQuery, page: usize, total_pages: usize) -> impl IntoView {
    let prev = (page > 1).then(|| links::page_href(&query, page - 1));
    let next = (page < total_pages).then(|| links::page_href(&query, page + 1));
    (total_pages > 1).then(move || {
        view! {
            <nav class="pager" aria-label="Pagination">
                {prev.map(|href| view! { <a class="btn btn-outline" href=href>"Previous"</a> })}
                <span>{format!("Page {page} of {total_pages}")}</span>
                {next.map(|href| view! { <a class="btn btn-outline" href=href>"Next"</a> })}
            </nav>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crowdfund_adapter_mock::MockCampaignRepository;
    use crowdfund_app::ports::CampaignRepository;
    use std::collections::HashMap;

    async fn seed() -> Vec<Campaign> {
        MockCampaignRepository::seeded().unwrap().get_all().await.unwrap()
    }

    fn url(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_read_filters_and_page_from_url() {
        let (query, page) = listing_filters(url(&[("category", "art"), ("q", "wall"), ("page", "2")]));
        assert_eq!(query.category, Some(Category::Art));
        assert_eq!(query.search.as_deref(), Some("wall"));
        assert_eq!(query.page, None);
        assert_eq!(page, 2);
    }

    #[test]
    fn should_default_to_first_page() {
        let (query, page) = listing_filters(url(&[("page", "zero"), ("per_page", "50")]));
        assert_eq!(query, CampaignQuery::default());
        assert_eq!(page, 1);
    }

    #[tokio::test]
    async fn should_split_matches_into_pages() {
        let listing = ListingPage::new(seed().await, 2, 3);
        assert_eq!(listing.total, 8);
        assert_eq!(listing.total_pages, 3);
        let ids: Vec<_> = listing.campaigns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["4", "5", "6"]);
    }

    #[tokio::test]
    async fn should_clamp_page_past_the_end() {
        let listing = ListingPage::new(seed().await, 9, 3);
        assert_eq!(listing.page, 3);
        assert_eq!(listing.campaigns.len(), 2);
    }

    #[test]
    fn should_report_single_empty_page() {
        let listing = ListingPage::new(Vec::new(), 1, 12);
        assert_eq!(listing.total_pages, 1);
        assert!(listing.campaigns.is_empty());
    }

    #[test]
    fn should_title_listing_after_filters() {
        let query = CampaignQuery {
            category: Some(Category::Health),
            ..CampaignQuery::default()
        };
        assert_eq!(heading(&query), "Health Campaigns");
        assert_eq!(heading(&CampaignQuery::default()), "All Campaigns");
    }
}
