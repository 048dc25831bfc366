//! Top navigation bar.

use crowdfund_domain::campaign::Category;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::links;
use crate::session::use_session;

/// Site navigation: brand, main links, category menu, search, account area.
///
/// On narrow screens the links collapse behind the "Menu" toggle.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (menu_open, set_menu_open) = signal(false);
    let (categories_open, set_categories_open) = signal(false);
    let (account_open, set_account_open) = signal(false);
    let (search, set_search) = signal(String::new());

    let close_menus = move |_: leptos::ev::MouseEvent| {
        set_menu_open.set(false);
        set_categories_open.set(false);
        set_account_open.set(false);
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let href = links::search_href(&search.get_untracked());
        set_menu_open.set(false);
        navigate(&href, NavigateOptions::default());
    };

    let category_links = Category::ALL
        .into_iter()
        .map(|category| {
            view! {
                <li>
                    <a href=links::category_href(category) on:click=close_menus>
                        {category.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    let account = move || {
        let user = session.get();
        if !user.logged_in {
            return view! { <a class="btn btn-secondary" href="/login">"Login"</a> }.into_any();
        }
        let dashboard = user.dashboard_link();
        let avatar = match user.avatar_url.clone() {
            Some(url) => view! {
                <img class="avatar" src=url alt=format!("{} avatar", user.display_name())/>
            }
            .into_any(),
            None => view! { <span class="avatar avatar-fallback">{user.initials()}</span> }.into_any(),
        };
        view! {
            <a class="nav-dashboard" href=dashboard.href>{dashboard.label}</a>
            <div class="dropdown">
                <button
                    class="avatar-button"
                    aria-label="Account menu"
                    on:click=move |_| set_account_open.update(|open| *open = !*open)
                >
                    {avatar}
                </button>
                <div class="dropdown-menu dropdown-menu-end" class:open=move || account_open.get()>
                    <p class="dropdown-label">
                        "Signed in as "
                        <strong>{user.display_name().to_string()}</strong>
                    </p>
                    <a href=dashboard.href on:click=close_menus>{dashboard.label}</a>
                    <a href="/settings" on:click=close_menus>"Settings"</a>
                    <a href="/logout" on:click=close_menus>"Logout"</a>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <button
                    class="btn btn-secondary menu-toggle"
                    aria-label="Open menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "Menu"
                </button>
                <a class="brand" href="/" on:click=close_menus>
                    <span class="brand-mark" aria-hidden="true"></span>
                    "Crowdfund"
                </a>

                <nav class="nav-links" class:open=move || menu_open.get()>
                    <a href="/" on:click=close_menus>"Home"</a>
                    <a href=links::LISTING on:click=close_menus>"Explore"</a>
                    <div class="dropdown">
                        <button
                            class="nav-link-button"
                            on:click=move |_| set_categories_open.update(|open| *open = !*open)
                        >
                            "Categories \u{25BE}"
                        </button>
                        <ul class="dropdown-menu" class:open=move || categories_open.get()>
                            <li class="dropdown-label">"Browse Categories"</li>
                            {category_links}
                        </ul>
                    </div>
                    <a href="/contact" on:click=close_menus>"Contact"</a>
                    <form class="nav-search" role="search" on:submit=on_search>
                        <input
                            type="search"
                            placeholder="Search..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </form>
                    <a class="btn btn-primary" href="/start" on:click=close_menus>"Start a Campaign"</a>
                </nav>

                <div class="nav-account">{account}</div>
            </div>
        </header>
    }
}
