// Example: list mutation with exit animations (toast-style messages).
use presence::{Node, Reconciler, ReconcilerOptions, RenderedItem};

fn print_cycle(label: &str, out: &[RenderedItem<String, u64>]) {
    println!("{label}:");
    for item in out {
        let state = if item.flags.shown { "shown" } else { "exiting" };
        println!("  [{}] {} ({state})", item.key, item.content);
    }
}

fn main() {
    let mut r: Reconciler<String, u64> = Reconciler::new(ReconcilerOptions::new());

    let out = r.reconcile(vec![
        Node::item(1u64, String::from("hello")),
        Node::item(2u64, String::from("world")),
    ]);
    print_cycle("mount", &out);

    // Message 1 disappears from the requested list; it keeps its slot while exiting.
    let out = r.reconcile(vec![Node::item(2u64, String::from("world"))]);
    print_cycle("after removal", &out);

    // The transition primitive reports that the hide animation finished.
    let completion = r.complete_exit(&1);
    println!(
        "completion: {completion:?}, render requested: {}",
        r.take_render_request()
    );

    let out = r.reconcile(vec![Node::item(2u64, String::from("world"))]);
    print_cycle("after drain", &out);
}
