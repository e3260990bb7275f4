//! Page footer crediting the stack the feed runs on.

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>
                "built by "
                <a href="https://astria.org" target="_blank" rel="noopener">"Astria"</a>
                " with "
                <a href="https://celestia.org/" target="_blank" rel="noopener">"Celestia"</a>
                " underneath"
            </p>
            <p class="site-footer__links">
                <a href="https://twitter.com/AstriaOrg" target="_blank" rel="noopener">"Twitter"</a>
                <a href="https://github.com/astriaorg/messenger-rollup" target="_blank" rel="noopener">"GitHub"</a>
            </p>
        </footer>
    }
}
