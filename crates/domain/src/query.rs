//! Filtering and pagination for campaign listings.

use crate::campaign::{Campaign, Category};
use crate::funding::CampaignStatus;
use crate::time::Timestamp;

/// Page size used when none is requested.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Listing filters, as carried by the `/all-campaigns` URL or the JSON API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignQuery {
    pub category: Option<Category>,
    /// Case-insensitive title substring.
    pub search: Option<String>,
    pub status: Option<CampaignStatus>,
    /// 1-based page number. `None` returns every match.
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl CampaignQuery {
    /// Build a query from URL-style key/value pairs.
    ///
    /// Recognised keys: `category`, `q`, `status`, `page`, `per_page`.
    /// Blank values and values that do not parse are ignored rather than
    /// rejected, so a mistyped link still shows a listing.
    #[must_use]
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "category" => query.category = value.parse().ok(),
                "q" => query.search = Some(value.to_string()),
                "status" => query.status = CampaignStatus::from_slug(value),
                "page" => query.page = value.parse().ok().filter(|p| *p > 0),
                "per_page" => query.per_page = value.parse().ok().filter(|p| *p > 0),
                _ => {}
            }
        }
        query
    }

    /// Serialize back into URL-style pairs, skipping unset filters.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.slug().to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("q", search.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.slug().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }

    /// Whether `campaign` passes every filter (pagination aside).
    #[must_use]
    pub fn matches(&self, campaign: &Campaign, now: Timestamp) -> bool {
        if self.category.is_some_and(|c| c != campaign.category) {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !campaign.title.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if self.status.is_some_and(|s| s != campaign.status(now)) {
            return false;
        }
        true
    }

    /// Filter `campaigns`, then cut out the requested page.
    #[must_use]
    pub fn apply(&self, campaigns: Vec<Campaign>, now: Timestamp) -> Vec<Campaign> {
        let matching = campaigns.into_iter().filter(|c| self.matches(c, now));
        match self.page {
            Some(page) => {
                let per_page = self.per_page.unwrap_or(DEFAULT_PAGE_SIZE);
                matching
                    .skip(page.saturating_sub(1).saturating_mul(per_page))
                    .take(per_page)
                    .collect()
            }
            None => matching.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{CampaignId, UserId};
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap()
    }

    fn campaign(id: &str, title: &str, category: Category, raised: f64, days_left: i64) -> Campaign {
        Campaign::builder()
            .id(CampaignId::new(id).unwrap())
            .creator_id(UserId::new("u").unwrap())
            .title(title)
            .category(category)
            .goal_amount(100.0)
            .raised_amount(raised)
            .start_date(now() - Duration::days(30))
            .end_date(now() + Duration::days(days_left))
            .build()
            .unwrap()
    }

    fn sample() -> Vec<Campaign> {
        vec![
            campaign("1", "Smart Eco Bottle", Category::Technology, 60.0, 10),
            campaign("2", "Community Art Wall", Category::Art, 100.0, 10),
            campaign("3", "STEM Kits for Schools", Category::Education, 20.0, -2),
            campaign("4", "Beach Cleanup Drive", Category::Environment, 98.0, 5),
        ]
    }

    fn ids(list: &[Campaign]) -> Vec<&str> {
        list.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn should_return_everything_for_empty_query() {
        let result = CampaignQuery::default().apply(sample(), now());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn should_filter_by_category() {
        let query = CampaignQuery {
            category: Some(Category::Art),
            ..CampaignQuery::default()
        };
        assert_eq!(ids(&query.apply(sample(), now())), ["2"]);
    }

    #[test]
    fn should_search_titles_case_insensitively() {
        let query = CampaignQuery::from_pairs([("q", "stem")]);
        assert_eq!(ids(&query.apply(sample(), now())), ["3"]);
    }

    #[test]
    fn should_filter_by_derived_status() {
        let funded = CampaignQuery::from_pairs([("status", "funded")]);
        assert_eq!(ids(&funded.apply(sample(), now())), ["2"]);
        let ended = CampaignQuery::from_pairs([("status", "ended")]);
        assert_eq!(ids(&ended.apply(sample(), now())), ["3"]);
        let active = CampaignQuery::from_pairs([("status", "active")]);
        assert_eq!(ids(&active.apply(sample(), now())), ["1", "4"]);
    }

    #[test]
    fn should_paginate_after_filtering() {
        let query = CampaignQuery::from_pairs([("page", "2"), ("per_page", "3")]);
        assert_eq!(ids(&query.apply(sample(), now())), ["4"]);
        let past_end = CampaignQuery::from_pairs([("page", "5"), ("per_page", "3")]);
        assert!(past_end.apply(sample(), now()).is_empty());
    }

    #[test]
    fn should_treat_page_zero_as_first_page() {
        let query = CampaignQuery {
            page: Some(0),
            per_page: Some(2),
            ..CampaignQuery::default()
        };
        assert_eq!(ids(&query.apply(sample(), now())), ["1", "2"]);
    }

    #[test]
    fn should_ignore_blank_and_invalid_params() {
        let query = CampaignQuery::from_pairs([
            ("category", "gardening"),
            ("q", "  "),
            ("page", "0"),
            ("status", "draft"),
            ("unknown", "x"),
        ]);
        assert_eq!(query, CampaignQuery::default());
    }

    #[test]
    fn should_roundtrip_through_pairs() {
        let query = CampaignQuery {
            category: Some(Category::Health),
            search: Some("van".to_string()),
            status: Some(CampaignStatus::Active),
            page: Some(2),
            per_page: Some(6),
        };
        let parsed = CampaignQuery::from_pairs(query.to_pairs());
        assert_eq!(parsed, query);
    }
}
