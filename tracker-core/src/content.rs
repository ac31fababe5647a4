//! Site content loaded from `site.toml`.
//!
//! Every table is optional; missing keys fall back to the copy of the
//! shipped page.

use serde::Deserialize;
use tracing::warn;

use crate::carousel::CarouselConfig;
use crate::error::ContentError;

pub const DEFAULT_LOG_LEVEL: &str = "info";

const DEFAULT_SLIDE: &str =
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=1600&q=80&auto=format&fit=crop";

/// Root of `site.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// `tracing` filter directive used by the page's console logger.
    pub log_level: String,
    pub brand: Brand,
    pub nav: Vec<Link>,
    pub carousel: CarouselConfig,
    pub slides: Vec<Slide>,
    pub hero: Hero,
    pub features: Features,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub label: String,
    #[serde(default = "default_href")]
    pub href: String,
}

/// One carousel entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Text overlaid on the carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub title: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Features {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Footer {
    /// Name shown in the copyright line.
    pub owner: String,
    pub links: Vec<Link>,
}

fn default_href() -> String {
    "#".to_string()
}

fn link(label: &str) -> Link {
    Link {
        label: label.to_string(),
        href: default_href(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            brand: Brand::default(),
            nav: ["Home", "Features", "Pricing", "Contact"]
                .into_iter()
                .map(link)
                .collect(),
            carousel: CarouselConfig::default(),
            slides: vec![Slide {
                src: DEFAULT_SLIDE.to_string(),
                alt: None,
            }],
            hero: Hero::default(),
            features: Features::default(),
            footer: Footer::default(),
        }
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Tracker".to_string(),
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "Location Tracking System".to_string(),
            tagline: "Real-time tracking and location insights for your fleet or assets."
                .to_string(),
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            title: "Features".to_string(),
            items: vec![
                "Realtime location".to_string(),
                "History & reports".to_string(),
                "Alerts & geofencing".to_string(),
            ],
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            owner: "Tracker".to_string(),
            links: vec![link("Privacy"), link("Terms")],
        }
    }
}

impl Slide {
    /// Alt text, falling back to `slide-{index}`.
    pub fn alt_text(&self, index: usize) -> String {
        self.alt
            .clone()
            .unwrap_or_else(|| format!("slide-{index}"))
    }
}

impl SiteContent {
    /// Parse and validate `site.toml` source.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Like [`from_toml`](Self::from_toml), but never fails: invalid
    /// content is logged and the built-in copy is used instead.
    pub fn load_embedded(source: &str) -> Self {
        match Self::from_toml(source) {
            Ok(content) => content,
            Err(err) => {
                warn!(%err, "invalid site content, falling back to built-in copy");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.slides.is_empty() {
            return Err(ContentError::NoSlides);
        }
        self.carousel.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_source_yields_reference_page() {
        let content = SiteContent::from_toml("").expect("empty file is valid");
        assert_eq!(content, SiteContent::default());
        assert_eq!(content.slides.len(), 1);
        assert_eq!(content.brand.name, "Tracker");
        assert_eq!(
            content.nav.iter().map(|l| l.label.as_str()).collect::<Vec<_>>(),
            vec!["Home", "Features", "Pricing", "Contact"]
        );
    }

    #[test]
    fn parses_full_file() {
        let source = r##"
log_level = "debug"

[brand]
name = "Fleetly"

[[nav]]
label = "Docs"
href = "/docs"

[carousel]
interval_ms = 2500
swipe_threshold = 30.0
pause_on_hover = false

[[slides]]
src = "a.jpg"
alt = "Dashboard"

[[slides]]
src = "b.jpg"

[hero]
title = "Track everything"

[features]
items = ["One", "Two"]

[footer]
owner = "Fleetly Inc."

[[footer.links]]
label = "Imprint"
"##;
        let content = SiteContent::from_toml(source).expect("valid content");
        assert_eq!(content.log_level, "debug");
        assert_eq!(content.brand.name, "Fleetly");
        assert_eq!(
            content.nav,
            vec![Link {
                label: "Docs".into(),
                href: "/docs".into()
            }]
        );
        assert_eq!(content.carousel.interval_ms, 2500);
        assert_eq!(content.carousel.swipe_threshold, 30.0);
        assert!(!content.carousel.pause_on_hover);
        assert!(content.carousel.keyboard);
        assert_eq!(content.slides[0].alt_text(0), "Dashboard");
        assert_eq!(content.slides[1].alt_text(1), "slide-1");
        assert_eq!(content.hero.title, "Track everything");
        assert_eq!(content.hero.tagline, Hero::default().tagline);
        assert_eq!(content.features.title, "Features");
        assert_eq!(content.features.items, vec!["One", "Two"]);
        assert_eq!(content.footer.owner, "Fleetly Inc.");
        assert_eq!(content.footer.links[0].href, "#");
    }

    #[test]
    fn rejects_empty_slide_list() {
        let err = SiteContent::from_toml("slides = []").unwrap_err();
        assert!(matches!(err, ContentError::NoSlides));
    }

    #[test]
    fn rejects_invalid_carousel_settings() {
        let err = SiteContent::from_toml("[carousel]\ninterval_ms = 0").unwrap_err();
        assert!(matches!(err, ContentError::ZeroInterval));

        let err = SiteContent::from_toml("[carousel]\nswipe_threshold = -1.0").unwrap_err();
        assert!(matches!(err, ContentError::InvalidSwipeThreshold(_)));
    }

    #[test]
    fn rejects_interval_beyond_timer_range() {
        let err = SiteContent::from_toml("[carousel]\ninterval_ms = 4294967305").unwrap_err();
        assert!(matches!(err, ContentError::IntervalTooLong(4_294_967_305)));
    }

    #[test]
    fn load_embedded_falls_back_on_invalid_content() {
        let content = SiteContent::load_embedded("[carousel]\ninterval_ms = 0");
        assert_eq!(content, SiteContent::default());

        let content = SiteContent::load_embedded("this is = = not toml");
        assert_eq!(content, SiteContent::default());
    }

    #[test]
    fn load_embedded_keeps_valid_content() {
        let content = SiteContent::load_embedded("[brand]\nname = \"Fleetly\"");
        assert_eq!(content.brand.name, "Fleetly");
        assert_eq!(content.slides, SiteContent::default().slides);
    }

    #[test]
    fn reports_parse_errors() {
        let err = SiteContent::from_toml("[carousel\ninterval_ms = 1").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse site content"));
    }

    #[test]
    fn slide_requires_src() {
        let err = SiteContent::from_toml("[[slides]]\nalt = \"x\"").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
