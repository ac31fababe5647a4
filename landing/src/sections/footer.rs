use leptos::prelude::*;
use tracker_core::content::Footer as FooterContent;

#[component]
pub fn Footer(footer: FooterContent) -> impl IntoView {
    let copyright = copyright_line(current_year(), &footer.owner);
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <p class="footer-copyright">{copyright}</p>
                <div class="footer-links">
                    {footer
                        .links
                        .into_iter()
                        .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn copyright_line(year: u32, owner: &str) -> String {
    format!("© {year} {owner} — All rights reserved")
}
