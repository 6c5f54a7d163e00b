// Example: observe batched view-state changes, the way reactive bindings would.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use scroll_menu::{ControllerOptions, ScrollMenuController, ViewState};

fn main() {
    let renders = Arc::new(AtomicUsize::new(0));
    let opts = ControllerOptions::new().with_on_change(Some({
        let renders = Arc::clone(&renders);
        move |_: &ScrollMenuController, s: ViewState| {
            renders.fetch_add(1, Ordering::Relaxed);
            println!("re-render: {s:?}");
        }
    }));
    let mut c = ScrollMenuController::new(opts);

    c.on_page_ready();
    c.on_scroll(120, 900, None);
    c.on_scroll(120, 900, None);
    c.on_scroll(120, 900, None); // unchanged: no re-render
    c.toggle_menu_items();

    println!("renders={}", renders.load(Ordering::Relaxed));
}
