// Landing page sections
// Tracker landing page, Leptos 0.8 CSR

mod features;
mod footer;
mod header;
mod hero_carousel;

pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero_carousel::HeroCarousel;
