// Tracker Landing Page — Leptos 0.8 Edition

mod logging;
mod sections;

use leptos::prelude::*;
use sections::*;
use tracing::info;
use tracker_core::SiteContent;

/// Page copy and carousel settings, baked in at build time.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let logger = logging::init();
    let content = SiteContent::load_embedded(SITE_TOML);
    if let Some(handle) = &logger {
        logging::set_level(handle, &content.log_level);
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        slides = content.slides.len(),
        "mounting landing page"
    );
    leptos::mount::mount_to_body(move || view! { <App content=content /> });
}

#[component]
fn App(content: SiteContent) -> impl IntoView {
    let SiteContent {
        brand,
        nav,
        carousel,
        slides,
        hero,
        features,
        footer,
        ..
    } = content;

    view! {
        <div class="page">
            <Header brand=brand nav=nav />
            <main class="page-main">
                <HeroCarousel slides=slides hero=hero config=carousel />
                <Features features=features />
            </main>
            <Footer footer=footer />
        </div>
    }
}
