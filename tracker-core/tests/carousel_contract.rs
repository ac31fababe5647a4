//! End-to-end behavior of the carousel controller through the public API.

use tracker_core::{Carousel, CarouselConfig, Cause, Scoped};

const MAX_LEN: usize = 8;

fn carousel(len: usize) -> Carousel {
    Carousel::new(len).expect("non-empty carousel")
}

/// Deterministic mixed sequence of forward/backward steps.
fn steps(seed: usize, count: usize) -> impl Iterator<Item = bool> {
    (0..count).map(move |i| (i * 7 + seed * 13) % 5 < 3)
}

#[test]
fn index_stays_in_range_for_any_step_sequence() {
    for len in 1..=MAX_LEN {
        for seed in 0..16 {
            let mut c = carousel(len);
            for forward in steps(seed, 64) {
                if forward {
                    c.next();
                } else {
                    c.previous();
                }
                assert!(c.index() < len, "len {len} seed {seed}: {}", c.index());
            }
        }
    }
}

#[test]
fn next_then_previous_restores_index() {
    for len in 1..=MAX_LEN {
        for start in 0..len {
            let mut c = carousel(len);
            c.go_to(start);
            c.next();
            c.previous();
            assert_eq!(c.index(), start, "len {len}");
        }
    }
}

#[test]
fn full_lap_returns_to_start() {
    for len in 1..=MAX_LEN {
        for start in 0..len {
            let mut c = carousel(len);
            c.go_to(start);
            for _ in 0..len {
                c.next();
            }
            assert_eq!(c.index(), start, "len {len}");
        }
    }
}

#[test]
fn rapid_navigation_counts_every_call() {
    let len = 5;
    let mut c = carousel(len);
    for _ in 0..1003 {
        c.next();
    }
    assert_eq!(c.index(), 1003 % len);
    for _ in 0..1001 {
        c.previous();
    }
    assert_eq!(c.index(), (1003 - 1001) % len);
}

#[test]
fn autoplay_respects_pause() {
    for len in 1..=MAX_LEN {
        let mut c = carousel(len);
        c.set_paused(true);
        for _ in 0..3 {
            assert!(c.tick().is_none());
        }
        assert_eq!(c.index(), 0);

        c.set_paused(false);
        for expected in 1..=len {
            let nav = c.tick().expect("playing tick advances");
            assert_eq!(nav.cause, Cause::Autoplay);
            assert_eq!(c.index(), expected % len);
        }
    }
}

#[test]
fn swipe_scenarios() {
    let mut c = carousel(3);
    c.go_to(1);

    c.touch_start(200.0);
    c.touch_end(100.0);
    assert_eq!(c.index(), 2, "leftward swipe shows next");

    c.touch_start(100.0);
    c.touch_end(200.0);
    assert_eq!(c.index(), 1, "rightward swipe shows previous");

    c.touch_start(100.0);
    c.touch_end(130.0);
    assert_eq!(c.index(), 1, "short swipe ignored");
}

#[test]
fn keyboard_scenario() {
    let mut c = carousel(3);
    c.handle_key("ArrowRight");
    assert_eq!(c.index(), 1);
    c.handle_key("ArrowLeft");
    assert_eq!(c.index(), 0);
}

#[test]
fn dot_click_scenario() {
    for prior in 0..3 {
        let mut c = carousel(3);
        c.go_to(prior);
        c.go_to(2);
        assert_eq!(c.index(), 2);
    }
}

#[test]
fn configured_interval_is_exposed() {
    let config = CarouselConfig {
        interval_ms: 1500,
        ..Default::default()
    };
    let c = Carousel::with_config(2, &config).expect("carousel");
    assert_eq!(c.interval().as_millis(), 1500);
}

#[test]
fn torn_down_timer_cannot_reach_controller() {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    let controller = Rc::new(RefCell::new(carousel(3)));
    let subscribed = Rc::new(Cell::new(true));

    // the "timer" only reaches the controller while subscribed
    let fire = {
        let controller = controller.clone();
        let subscribed = subscribed.clone();
        move || {
            if subscribed.get() {
                controller.borrow_mut().tick();
            }
        }
    };

    let flag = subscribed.clone();
    let mut timer = Scoped::new(move || flag.set(false));
    fire();
    fire();
    assert_eq!(controller.borrow().index(), 2);

    assert!(timer.release());
    fire();
    assert_eq!(controller.borrow().index(), 2);
    assert!(!timer.is_active());
}
