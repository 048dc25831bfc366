//! Landing page: hero, categories, featured campaigns, testimonials.

use crowdfund_domain::campaign::Category;
use crowdfund_domain::time;
use leptos::prelude::*;

use crate::components::{CampaignCard, Loading};
use crate::config::DashboardConfig;
use crate::links;
use crate::source::use_campaign_source;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Ava D.",
        role: "Creator",
        quote: "We hit 120% of our goal in 18 days. The backers\u{2019} support turned our idea into a real product.",
    },
    Testimonial {
        name: "Liam K.",
        role: "Donor",
        quote: "Supporting projects here feels personal. I love tracking progress and seeing updates roll in.",
    },
    Testimonial {
        name: "Noah S.",
        role: "Creator",
        quote: "The platform\u{2019}s simplicity helped us focus on storytelling, and it paid off.",
    },
];

#[component]
pub fn Home() -> impl IntoView {
    let featured_count = use_context::<DashboardConfig>()
        .unwrap_or_default()
        .featured_count;
    let source = use_campaign_source();
    let featured = LocalResource::new(move || {
        let source = source.clone();
        async move { source.featured(featured_count).await }
    });

    let category_chips = Category::ALL
        .into_iter()
        .map(|category| {
            view! {
                <a class="chip" href=links::category_href(category)>{category.label()}</a>
            }
        })
        .collect_view();

    let testimonials = TESTIMONIALS
        .iter()
        .map(|t| {
            view! {
                <figure class="testimonial">
                    <blockquote>{format!("\u{201C}{}\u{201D}", t.quote)}</blockquote>
                    <figcaption>
                        <strong>{t.name}</strong>
                        <span class="muted">{format!(" \u{2022} {}", t.role)}</span>
                    </figcaption>
                </figure>
            }
        })
        .collect_view();

    view! {
        <div class="page home">
            <section class="hero" aria-label="Hero">
                <p class="eyebrow">"Crowdfunding Platform"</p>
                <h1>"Support Creative Ideas. Fund the Future."</h1>
                <p class="lead">
                    "Discover inspiring projects across technology, art, education, health, and more. "
                    "Back the creators you believe in and help bring bold ideas to life."
                </p>
                <div class="actions">
                    <a class="btn btn-primary" href=links::LISTING>"Explore Campaigns"</a>
                    <a class="btn btn-secondary" href="/start">"Start a Campaign"</a>
                </div>
            </section>

            <section id="categories">
                <h2>"Browse by Category"</h2>
                <div class="chips">{category_chips}</div>
            </section>

            <section id="featured">
                <div class="section-header">
                    <h2>"Featured Campaigns"</h2>
                    <a class="muted" href=links::LISTING>"View all"</a>
                </div>
                <Suspense fallback=move || view! { <Loading message="Loading campaigns\u{2026}"/> }>
                    {move || {
                        featured.read().as_ref().map(|result| match result {
                            Ok(campaigns) if campaigns.is_empty() => view! {
                                <p class="muted">"No campaigns found."</p>
                            }.into_any(),
                            Ok(campaigns) => {
                                let now = time::now();
                                view! {
                                    <div class="campaign-grid">
                                        {campaigns
                                            .iter()
                                            .cloned()
                                            .map(|campaign| view! { <CampaignCard campaign=campaign now=now/> })
                                            .collect_view()}
                                    </div>
                                }.into_any()
                            }
                            Err(err) => view! {
                                <p class="error">{"Failed to load campaigns: "} {err.to_string()}</p>
                            }.into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <section id="testimonials">
                <h2>"Success Stories"</h2>
                <div class="testimonials">{testimonials}</div>
            </section>

            <section id="cta" class="cta">
                <h2>"Ready to bring an idea to life?"</h2>
                <p class="muted">"Join thousands of backers and creators moving ideas forward together."</p>
                <div class="actions">
                    <a class="btn btn-primary" href="/register">"Sign Up"</a>
                    <a class="btn btn-secondary" href="/start">"Start a Campaign"</a>
                    <a class="btn btn-secondary" href="/contact">"Contact Us"</a>
                </div>
            </section>
        </div>
    }
}
