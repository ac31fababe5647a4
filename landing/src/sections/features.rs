use leptos::prelude::*;
use tracker_core::content::Features as FeaturesContent;

#[component]
pub fn Features(features: FeaturesContent) -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <h3 class="section-title">{features.title}</h3>
                <div class="features-grid">
                    {features
                        .items
                        .into_iter()
                        .map(|item| view! { <FeatureCard title=item /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(title: String) -> impl IntoView {
    view! { <div class="feature-card">{title}</div> }
}
