// Example: Controller-driven toast list with timed exit animations.
use presence::{Node, ReconcilerOptions};
use presence_adapter::Controller;

fn show(label: &str, out: &[presence::RenderedItem<String, u64>]) {
    let line: Vec<String> = out
        .iter()
        .map(|item| {
            let state = if item.flags.shown { "shown" } else { "exiting" };
            format!("{}:{} ({state})", item.key, item.content)
        })
        .collect();
    println!("{label}: [{}]", line.join(", "));
}

fn main() {
    let mut c: Controller<String, u64> = Controller::new(ReconcilerOptions::new(), 400);

    let out = c.render(
        vec![
            Node::item(1u64, String::from("saved")),
            Node::item(2u64, String::from("copied")),
        ],
        0,
    );
    show("t=0 mount", &out);

    // Toast 1 is dismissed; its hide animation runs for 400ms.
    let out = c.render(vec![Node::item(2u64, String::from("copied"))], 100);
    show("t=100 dismiss", &out);

    for now_ms in [300, 500] {
        let rerender = c.tick(now_ms);
        println!("t={now_ms} tick: rerender={rerender}");
        if rerender {
            let out = c.render(vec![Node::item(2u64, String::from("copied"))], now_ms);
            show(&format!("t={now_ms} rerender"), &out);
        }
    }
}
