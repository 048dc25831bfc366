//! Client-side route builders.

use crowdfund_domain::campaign::Category;
use crowdfund_domain::id::CampaignId;
use crowdfund_domain::query::CampaignQuery;

use crate::api::{encode_component, query_string};

pub const LISTING: &str = "/all-campaigns";

pub fn campaign_href(id: &CampaignId) -> String {
    format!("/campaigns/{}", encode_component(id.as_str()))
}

pub fn listing_href(query: &CampaignQuery) -> String {
    format!("{LISTING}{}", query_string(&query.to_pairs()))
}

pub fn category_href(category: Category) -> String {
    listing_href(&CampaignQuery {
        category: Some(category),
        ..CampaignQuery::default()
    })
}

/// Listing filtered by a free-text search; blank text lists everything.
pub fn search_href(text: &str) -> String {
    let text = text.trim();
    listing_href(&CampaignQuery {
        search: (!text.is_empty()).then(|| text.to_string()),
        ..CampaignQuery::default()
    })
}

/// The same listing on another page.
pub fn page_href(query: &CampaignQuery, page: usize) -> String {
    listing_href(&CampaignQuery {
        page: Some(page),
        ..query.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_link_to_campaign_detail() {
        let id = CampaignId::new("42").unwrap();
        assert_eq!(campaign_href(&id), "/campaigns/42");
    }

    #[test]
    fn should_link_to_category_listing() {
        assert_eq!(category_href(Category::Medical), "/all-campaigns?category=medical");
    }

    #[test]
    fn should_encode_search_text() {
        assert_eq!(search_href(" solar panels "), "/all-campaigns?q=solar%20panels");
        assert_eq!(search_href("   "), "/all-campaigns");
    }

    #[test]
    fn should_keep_filters_when_paging() {
        let query = CampaignQuery {
            category: Some(Category::Art),
            page: Some(1),
            ..CampaignQuery::default()
        };
        assert_eq!(page_href(&query, 3), "/all-campaigns?category=art&page=3");
    }
}
