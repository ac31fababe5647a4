use leptos::prelude::*;
use tracker_core::content::{Brand, Link};

#[component]
pub fn Header(brand: Brand, nav: Vec<Link>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="container">
                <div class="header-inner">
                    <a href="#" class="header-brand">{brand.name}</a>
                    <nav class="header-links">
                        {nav
                            .into_iter()
                            .map(|link| view! { <a href=link.href class="header-link">{link.label}</a> })
                            .collect_view()}
                    </nav>
                    // mobile menu placeholder
                    <div class="header-mobile"></div>
                </div>
            </div>
        </header>
    }
}
