// Example: simulate a browser page feeding signals to an explicitly constructed controller.
use scroll_menu::{ControllerOptions, ScrollMenuController};
use scroll_menu_adapter::{InlineStyle, Page, ScrollThrottle, Signal};

fn main() {
    let controller = ScrollMenuController::new(ControllerOptions::new());
    let mut page: Page = Page::new(controller)
        .with_target(InlineStyle::new())
        .with_throttle(ScrollThrottle::new(16));

    page.register_render(|| println!("render: posts"));
    page.register_render(|| println!("render: sidebar"));

    page.dispatch(Signal::Mount, 0);
    page.dispatch(Signal::PageReady, 5);

    // A fling: 60 Hz ticks, most coalesced by the throttle.
    let mut now_ms = 10;
    for offset in (0..=600u64).step_by(40) {
        if let Some(u) = page.dispatch(Signal::scroll(offset, 800), now_ms) {
            println!("applied scroll_top={} top={:?}", u.scroll_top, u.top);
        }
        now_ms += 8;
    }
    if let Some(u) = page.tick(now_ms + 16) {
        println!("trailing scroll_top={} top={:?}", u.scroll_top, u.top);
    }

    let state = page.controller().view_state();
    println!("final state={state:?}");
    println!(
        "inline top={}",
        page.target().and_then(|t| t.top()).unwrap_or("<unset>")
    );
    println!("listeners={:?}", page.host().listeners());
}
