//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_footer::SiteFooter;
use crate::config::{FeedConfig, META_CLIENT_ID, META_ENDPOINT, META_POLICY};
use crate::pages::feed::FeedPage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is written into `<meta>` tags so `hydrate()` can rebuild it.
pub fn shell(options: LeptosOptions, config: FeedConfig) -> impl IntoView {
    let client_id = config.client_id.clone();
    let endpoint = config.endpoint.clone();
    let policy = config.policy.as_str();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_CLIENT_ID content=client_id/>
                <meta name=META_ENDPOINT content=endpoint/>
                <meta name=META_POLICY content=policy/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the feed configuration to the page and sets up routing.
#[component]
pub fn App(config: FeedConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/block-feed.css"/>
        <Title text="Modular Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FeedPage/>
            </Routes>
        </Router>
        <SiteFooter/>
    }
}
