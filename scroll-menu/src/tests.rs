use crate::*;

use alloc::sync::Arc;
use core::cell::RefCell;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::rc::Rc;
use std::string::ToString;
use std::vec;
use std::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Debug, Default)]
struct Element {
    writes: Vec<TopOffset>,
}

impl StyleTarget for Element {
    fn set_top(&mut self, top: TopOffset) {
        self.writes.push(top);
    }
}

impl Element {
    fn last(&self) -> Option<f32> {
        self.writes.last().map(|t| t.px())
    }
}

#[derive(Debug, PartialEq)]
enum Event {
    Listen(ListenerOptions),
    Render(usize),
}

struct LogHost(Rc<RefCell<Vec<Event>>>);

impl Host for LogHost {
    fn listen_scroll(&mut self, options: ListenerOptions) {
        self.0.borrow_mut().push(Event::Listen(options));
    }
}

#[test]
fn new_controller_starts_loading_with_menu_visible() {
    let c = ScrollMenuController::default();
    assert_eq!(c.view_state(), ViewState::initial(true));
    assert!(c.loading());
    assert!(!c.hidden_menu());
    assert!(!c.show_menu_items());
    assert!(!c.menu_color());
    assert_eq!(c.scroll_top(), 0);
    assert!(!c.is_mounted());
}

#[test]
fn page_ready_clears_loading_and_is_idempotent() {
    let mut c = ScrollMenuController::default();
    c.on_page_ready();
    assert!(!c.loading());
    c.on_page_ready();
    assert!(!c.loading());
}

#[test]
fn mount_subscribes_before_running_renderers_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut c = ScrollMenuController::default();
    for i in 0..3usize {
        let log = Rc::clone(&log);
        assert!(c.register_render(move || log.borrow_mut().push(Event::Render(i))));
    }
    assert_eq!(c.pending_renders(), 3);

    let mut host = LogHost(Rc::clone(&log));
    c.on_mount(&mut host);

    assert!(c.is_mounted());
    assert_eq!(c.pending_renders(), 0);
    assert_eq!(
        *log.borrow(),
        vec![
            Event::Listen(ListenerOptions::CAPTURE),
            Event::Render(0),
            Event::Render(1),
            Event::Render(2),
        ]
    );
}

#[test]
fn second_mount_neither_resubscribes_nor_reruns_renderers() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut c = ScrollMenuController::default();
    {
        let log = Rc::clone(&log);
        c.register_render(move || log.borrow_mut().push(Event::Render(7)));
    }
    let mut host = LogHost(Rc::clone(&log));
    c.on_mount(&mut host);
    c.on_mount(&mut host);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn renderers_registered_after_mount_are_dropped() {
    let ran = Rc::new(RefCell::new(false));
    let mut c = ScrollMenuController::default();
    c.on_mount(&mut LogHost(Rc::new(RefCell::new(Vec::new()))));

    let flag = Rc::clone(&ran);
    assert!(!c.register_render(move || *flag.borrow_mut() = true));
    assert_eq!(c.pending_renders(), 0);
    assert!(!*ran.borrow());
}

#[test]
fn mount_uses_configured_listener_options() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let listener = ListenerOptions {
        capture: true,
        passive: true,
    };
    let mut c = ScrollMenuController::new(ControllerOptions::new().with_scroll_listener(listener));
    c.on_mount(&mut LogHost(Rc::clone(&log)));
    assert_eq!(*log.borrow(), vec![Event::Listen(listener)]);
}

#[test]
fn scroll_scenario_with_target_present() {
    // The page was already at 100px when the first scroll event arrives.
    let mut c = ScrollMenuController::default();
    c.restore_view_state(ViewState {
        scroll_top: 100,
        ..ViewState::initial(true)
    });
    let mut el = Element::default();

    c.on_scroll(100, 800, Some(&mut el));
    assert!(!c.hidden_menu());
    assert!(c.menu_color());
    assert_eq!(el.last(), Some(-20.0));

    c.set_show_menu_items(true);
    let u = c.on_scroll(300, 800, Some(&mut el));
    assert_eq!(u.direction, ScrollDirection::Forward);
    assert_eq!(u.previous_scroll_top, 100);
    assert!(c.hidden_menu());
    assert!(!c.show_menu_items());
    assert!(c.menu_color());
    assert_eq!(el.last(), Some(-60.0));

    c.on_scroll(250, 800, Some(&mut el));
    assert!(!c.hidden_menu());
    assert!(c.menu_color());
    assert_eq!(el.last(), Some(-50.0));

    c.on_scroll(1000, 800, Some(&mut el));
    assert!(c.hidden_menu());
    assert!(!c.menu_color());
    assert_eq!(el.last(), Some(-80.0));

    assert_eq!(el.writes.len(), 4);
    assert_eq!(c.scroll_top(), 1000);
}

#[test]
fn scroll_without_target_only_updates_direction_and_offset() {
    let mut c = ScrollMenuController::default();
    let mut el = Element::default();
    c.on_scroll(50, 800, Some(&mut el));
    assert!(c.menu_color());

    let u = c.on_scroll(2000, 800, None);
    assert_eq!(u.menu_color, None);
    assert_eq!(u.top, None);
    assert!(c.hidden_menu());
    // Would be `false` with a target present.
    assert!(c.menu_color());
    assert_eq!(c.scroll_top(), 2000);
    assert_eq!(el.writes.len(), 1);
}

#[test]
fn first_scroll_down_from_top_hides_menu() {
    let mut c = ScrollMenuController::default();
    let mut el = Element::default();
    c.on_scroll(100, 800, Some(&mut el));
    assert!(c.hidden_menu());
    assert!(c.menu_color());
    assert_eq!(el.last(), Some(-20.0));
}

#[test]
fn unchanged_offset_reveals_menu() {
    let mut c = ScrollMenuController::default();
    c.on_scroll(10, 800, None);
    assert!(c.hidden_menu());
    c.on_scroll(10, 800, None);
    assert!(!c.hidden_menu());
}

#[test]
fn scrolling_up_leaves_menu_items_alone() {
    let mut c = ScrollMenuController::default();
    c.on_scroll(500, 800, None);
    c.set_show_menu_items(true);
    c.on_scroll(100, 800, None);
    assert!(c.show_menu_items());
    assert!(!c.hidden_menu());

    c.toggle_menu_items();
    assert!(!c.show_menu_items());
    c.toggle_menu_items();
    c.on_scroll(101, 800, None);
    assert!(!c.show_menu_items());
}

#[test]
fn menu_color_threshold_is_inclusive_and_signed() {
    assert!(transitions::menu_color(700, 800, 100));
    assert!(!transitions::menu_color(701, 800, 100));
    assert!(transitions::menu_color(0, 100, 100));
    assert!(!transitions::menu_color(0, 99, 100));
    assert!(!transitions::menu_color(0, 0, 100));
    assert!(!transitions::menu_color(u64::MAX, u32::MAX, 0));
}

#[test]
fn top_offset_follows_parallax_then_clamps() {
    let opts = ControllerOptions::default();
    assert_eq!(transitions::top_offset(0, &opts).px(), 0.0);
    assert_eq!(transitions::top_offset(2, &opts), TopOffset(-0.4));
    assert_eq!(transitions::top_offset(399, &opts), TopOffset(-79.8));
    assert_eq!(transitions::top_offset(400, &opts), TopOffset(-80.0));
    assert_eq!(transitions::top_offset(401, &opts), TopOffset(-80.0));
    assert_eq!(transitions::top_offset(u64::MAX, &opts), TopOffset(-80.0));
}

#[test]
fn custom_parallax_options_apply_on_next_scroll() {
    let mut c = ScrollMenuController::default();
    let mut el = Element::default();
    c.on_scroll(100, 800, Some(&mut el));
    assert_eq!(el.last(), Some(-20.0));

    c.update_options(|o| {
        *o = o.clone().with_parallax(200, 0, -10.0).with_menu_color_margin(750);
    });
    // Divisor zero behaves as one.
    c.on_scroll(60, 800, Some(&mut el));
    assert_eq!(el.last(), Some(-60.0));
    assert!(!c.menu_color());
    c.on_scroll(201, 800, Some(&mut el));
    assert_eq!(el.last(), Some(-10.0));
}

#[test]
fn top_offset_formats_as_css_length() {
    assert_eq!(TopOffset(-20.0).to_string(), "-20px");
    assert_eq!(TopOffset(-0.4).to_string(), "-0.4px");
    assert_eq!(TopOffset(-80.0).to_string(), "-80px");
}

#[test]
fn randomized_scroll_sequences_hold_invariants() {
    let opts = ControllerOptions::default();
    let mut rng = Lcg::new(0x5eed);

    for _ in 0..64 {
        let mut c = ScrollMenuController::default();
        let mut el = Element::default();
        let viewport = rng.gen_range_u64(0, 1200) as u32;

        for _ in 0..128 {
            let prev = c.scroll_top();
            let next = if rng.gen_bool() {
                prev
            } else {
                rng.gen_range_u64(0, 3000)
            };
            if rng.gen_bool() {
                c.set_show_menu_items(true);
            }
            let with_target = rng.gen_bool();
            let color_before = c.menu_color();
            let writes_before = el.writes.len();

            let u = if with_target {
                c.on_scroll(next, viewport, Some(&mut el))
            } else {
                c.on_scroll(next, viewport, None)
            };

            assert_eq!(c.scroll_top(), next);
            assert_eq!(c.hidden_menu(), prev < next);
            if c.hidden_menu() {
                assert!(!c.show_menu_items());
            }

            if with_target {
                let expected_color = (next as i64) <= viewport as i64 - 100;
                assert_eq!(c.menu_color(), expected_color);
                assert_eq!(el.writes.len(), writes_before + 1);
                assert_eq!(u.top, Some(transitions::top_offset(next, &opts)));
                if next <= 400 {
                    assert_eq!(el.last(), Some(-(next as f32 / 5.0)));
                } else {
                    assert_eq!(el.last(), Some(-80.0));
                }
            } else {
                assert_eq!(c.menu_color(), color_before);
                assert_eq!(el.writes.len(), writes_before);
            }
        }
    }
}

#[test]
fn on_change_fires_once_per_scroll_and_skips_no_ops() {
    let calls = Arc::new(AtomicUsize::new(0));
    let opts = ControllerOptions::new().with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &ScrollMenuController, _: ViewState| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));
    let mut c = ScrollMenuController::new(opts);
    let mut el = Element::default();

    // Direction, color and scroll_top all change: still one notification.
    c.on_scroll(100, 800, Some(&mut el));
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    c.on_page_ready();
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    c.on_page_ready();
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    // The first repeat reveals the menu, the second changes nothing.
    c.on_scroll(100, 800, None);
    c.on_scroll(100, 800, None);
    assert_eq!(calls.load(Ordering::Relaxed), 3);
}

#[test]
fn on_change_sees_committed_state() {
    let seen = Arc::new(AtomicUsize::new(0));
    let mut c = ScrollMenuController::default();
    c.set_on_change(Some({
        let seen = Arc::clone(&seen);
        move |c: &ScrollMenuController, s: ViewState| {
            assert_eq!(c.view_state(), s);
            seen.store(s.scroll_top as usize, Ordering::Relaxed);
        }
    }));
    c.on_scroll(321, 800, None);
    assert_eq!(seen.load(Ordering::Relaxed), 321);
}

#[test]
fn batch_update_coalesces_external_changes() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut c = ScrollMenuController::default();
    c.set_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &ScrollMenuController, _: ViewState| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));
    c.batch_update(|c| {
        c.on_page_ready();
        c.set_show_menu_items(true);
        c.on_scroll(40, 800, None);
    });
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert!(!c.loading());
    assert!(c.hidden_menu());
    assert!(!c.show_menu_items());
}

#[test]
fn restore_view_state_round_trips_snapshot() {
    let mut a = ScrollMenuController::default();
    let mut el = Element::default();
    a.on_page_ready();
    a.on_scroll(120, 800, Some(&mut el));
    a.on_scroll(240, 800, Some(&mut el));
    let snapshot = a.view_state();

    let mut b = ScrollMenuController::default();
    b.restore_view_state(snapshot);
    assert_eq!(b.view_state(), snapshot);

    // Direction is judged against the restored offset.
    b.on_scroll(200, 800, None);
    assert!(!b.hidden_menu());
}

#[test]
fn render_queue_runs_each_callback_once() {
    let count = Rc::new(RefCell::new(0usize));
    let mut q = RenderQueue::new();
    for _ in 0..4 {
        let count = Rc::clone(&count);
        q.push(alloc::boxed::Box::new(move || *count.borrow_mut() += 1));
    }
    assert_eq!(q.len(), 4);
    assert_eq!(q.run_all(), 4);
    assert_eq!(q.run_all(), 0);
    assert!(q.is_drained());
    assert!(q.is_empty());
    assert_eq!(*count.borrow(), 4);
}
