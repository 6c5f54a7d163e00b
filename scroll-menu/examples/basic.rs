// Example: drive the controller by hand and print the header decisions.
use scroll_menu::{ScrollMenuController, StyleTarget, TopOffset};

#[derive(Default)]
struct Header {
    top: Option<TopOffset>,
}

impl StyleTarget for Header {
    fn set_top(&mut self, top: TopOffset) {
        self.top = Some(top);
    }
}

fn main() {
    let mut c = ScrollMenuController::default();
    let mut header = Header::default();

    c.on_page_ready();
    println!("loading={}", c.loading());

    for offset in [100u64, 300, 250, 1000, 0] {
        let u = c.on_scroll(offset, 800, Some(&mut header));
        println!(
            "scroll_top={offset} direction={:?} hidden_menu={} menu_color={} top={}",
            u.direction,
            c.hidden_menu(),
            c.menu_color(),
            header.top.map(|t| t.to_string()).unwrap_or_default()
        );
    }
}
