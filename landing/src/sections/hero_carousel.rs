//! Hero carousel: slides, overlay copy, prev/next controls, indicator dots.
//!
//! All state lives in one `tracker_core::Carousel` held in an `RwSignal`.
//! The autoplay interval and the window keydown listener are owned by
//! `Scoped` guards that are dropped when the component unmounts.

use leptos::ev;
use leptos::prelude::*;
use tracing::{info, warn};
use tracker_core::content::{Hero, Slide};
use tracker_core::{Carousel, CarouselConfig, Release, Scoped};

#[component]
pub fn HeroCarousel(slides: Vec<Slide>, hero: Hero, config: CarouselConfig) -> impl IntoView {
    let controller = match Carousel::with_config(slides.len(), &config) {
        Ok(controller) => controller,
        Err(err) => {
            warn!(%err, "carousel not rendered");
            return ().into_any();
        }
    };
    let len = controller.len();
    let interval = controller.interval();
    let carousel = RwSignal::new(controller);

    // One interval for the lifetime of the component. Paused ticks are
    // skipped by the controller, so the timer keeps its cadence.
    let timer = match set_interval_with_handle(
        move || carousel.update(|c| {
            c.tick();
        }),
        interval,
    ) {
        Ok(handle) => Some(Scoped::new(move || handle.clear())),
        Err(err) => {
            warn!(?err, "autoplay unavailable");
            None
        }
    };

    let keys = config.keyboard.then(|| {
        let handle = window_event_listener(ev::keydown, move |event| {
            carousel.update(|c| {
                c.handle_key(&event.key());
            });
        });
        Scoped::new(move || handle.remove())
    });

    info!(slides = len, ?interval, "carousel mounted");
    release_on_unmount(timer, keys);

    let on_touch_start = move |event: web_sys::TouchEvent| {
        if let Some(x) = first_touch_x(&event.touches()) {
            carousel.update(|c| c.touch_start(x));
        }
    };
    let on_touch_move = move |event: web_sys::TouchEvent| {
        if let Some(x) = first_touch_x(&event.touches()) {
            carousel.update(|c| c.touch_move(x));
        }
    };
    let on_touch_end = move |event: web_sys::TouchEvent| {
        match first_touch_x(&event.changed_touches()) {
            Some(x) => carousel.update(|c| {
                c.touch_end(x);
            }),
            None => carousel.update(|c| c.touch_cancel()),
        }
    };

    view! {
        <section class="carousel-section">
            <div
                class="carousel"
                on:mouseenter=move |_| carousel.update(|c| c.hover_enter())
                on:mouseleave=move |_| carousel.update(|c| c.hover_leave())
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
                on:touchcancel=move |_| carousel.update(|c| c.touch_cancel())
            >
                <div
                    class=move || track_class(carousel.with(|c| c.is_dragging()))
                    style=move || track_style(carousel.with(|c| c.drag_offset()))
                >
                    {slides
                        .into_iter()
                        .enumerate()
                        .map(|(i, slide)| {
                            let alt = slide.alt_text(i);
                            view! {
                                <img
                                    src=slide.src
                                    alt=alt
                                    class=move || slide_class(carousel.with(|c| c.is_current(i)))
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="carousel-overlay">
                    <div class="carousel-overlay-text">
                        <h2 class="carousel-title">{hero.title}</h2>
                        <p class="carousel-tagline">{hero.tagline}</p>
                    </div>
                </div>

                <button
                    class="carousel-control prev"
                    aria-label="Previous slide"
                    on:click=move |_| carousel.update(|c| {
                        c.previous();
                    })
                >
                    "‹"
                </button>
                <button
                    class="carousel-control next"
                    aria-label="Next slide"
                    on:click=move |_| carousel.update(|c| {
                        c.next();
                    })
                >
                    "›"
                </button>

                <div class="carousel-dots">
                    {(0..len)
                        .map(|i| {
                            view! {
                                <button
                                    class=move || dot_class(carousel.with(|c| c.is_current(i)))
                                    aria-label=dot_label(i)
                                    on:click=move |_| carousel.update(|c| {
                                        c.go_to(i);
                                    })
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

/// Tie the autoplay timer and key listener to the current reactive owner.
fn release_on_unmount<T, K>(timer: Option<Scoped<T>>, keys: Option<Scoped<K>>)
where
    T: Release + Send + Sync + 'static,
    K: Release + Send + Sync + 'static,
{
    on_cleanup(move || {
        drop(timer);
        drop(keys);
        info!("carousel unmounted");
    });
}

fn first_touch_x(touches: &web_sys::TouchList) -> Option<f64> {
    touches.get(0).map(|touch| f64::from(touch.client_x()))
}

fn slide_class(active: bool) -> &'static str {
    if active {
        "carousel-slide active"
    } else {
        "carousel-slide"
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "carousel-dot active"
    } else {
        "carousel-dot"
    }
}

fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

fn track_class(dragging: bool) -> &'static str {
    if dragging {
        "carousel-track dragging"
    } else {
        "carousel-track"
    }
}

/// Drag preview. The committed slide only changes on touch end.
fn track_style(offset: f64) -> String {
    if offset == 0.0 {
        String::new()
    } else {
        format!("transform: translateX({offset:.1}px);")
    }
}
