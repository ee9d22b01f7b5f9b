// Example: exclusive single-value swap (exit before enter).
use presence::{Node, Reconciler, ReconcilerOptions};

fn main() {
    let mut r: Reconciler<String> =
        Reconciler::new(ReconcilerOptions::new().with_exit_before_enter(true));

    let out = r.reconcile(vec![Node::item("msg-1", String::from("hello #1"))]);
    println!("mount: {:?}", out);

    // The new value is deferred while the old one animates out.
    let out = r.reconcile(vec![Node::item("msg-2", String::from("hello #2"))]);
    println!("swap (old value exiting): {:?}", out);

    let completion = r.complete_exit(&"msg-1".into());
    println!(
        "completion: {completion:?}, render requested: {}",
        r.take_render_request()
    );

    let out = r.reconcile(vec![Node::item("msg-2", String::from("hello #2"))]);
    println!("after drain: {:?}", out);
}
