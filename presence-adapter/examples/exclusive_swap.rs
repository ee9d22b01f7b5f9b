// Example: swapping a single value with exit-before-enter sequencing.
use presence::{Node, ReconcilerOptions};
use presence_adapter::Controller;

fn main() {
    let mut c: Controller<String> =
        Controller::new(ReconcilerOptions::new().with_exit_before_enter(true), 250);

    let mut counter = 1u32;
    let mut message = || {
        let m = format!("hello #{counter}");
        counter += 1;
        m
    };

    let value = message();
    let out = c.render(vec![Node::item(value.clone(), value.clone())], 0);
    println!("t=0: {out:?}");

    // Requesting the next value defers its entrance until the old one has left.
    let next = message();
    let out = c.render(vec![Node::item(next.clone(), next.clone())], 10);
    println!("t=10 (old value exiting): {out:?}");

    if c.tick(260) {
        let out = c.render(vec![Node::item(next.clone(), next.clone())], 260);
        println!("t=260 (entrant admitted): {out:?}");
    }
}
