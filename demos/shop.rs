//! Shop walkthrough - assembling the site and navigating it.
//!
//! Builds the registry, mounts the page shell, clicks through the
//! sidebar, then drives the router including a back-navigation.
//!
//! Run with: cargo run --example shop

use std::rc::Rc;

use vitrine::{
    default_routes, register_defaults, ComponentRegistry, ComponentTree, MemoryHistory, Router,
};

fn main() {
    let mut registry = ComponentRegistry::new();
    register_defaults(&mut registry).expect("registry population");
    println!("defined tags: {:?}\n", registry.tags());

    let mut tree = ComponentTree::new(Rc::new(registry));

    // Repaint whenever any instance renders.
    let generation = tree.render_generation();
    let _stop = spark_signals::effect(move || {
        println!("render generation: {}", generation.get());
    });

    // Mount the page shell and navigate via the sidebar.
    let page = tree.create("vit-page").expect("create page shell");
    tree.attach(page, None).expect("attach page shell");

    let sidebar = tree.find_child(page, "sidebar").expect("sidebar upgraded");
    let hours_icon = tree.find_child(sidebar, "uren").expect("hours icon");
    tree.click(hours_icon).expect("click hours icon");

    println!("\npage shell after clicking Openingsuren:");
    println!("{}\n", tree.rendered_html(page).expect("page html"));

    // Drive the router directly.
    let mut router = Router::new(default_routes(), MemoryHistory::new()).expect("router");
    router.on_history_popped(&mut tree).expect("initial resolve");
    router
        .navigate_to(&mut tree, "/contact")
        .expect("navigate to contact");
    let root = router.root().expect("mounted root");
    println!("mounted after /contact: {}", tree.tag(root).expect("tag"));

    router.pop_back(&mut tree).expect("pop back");
    let root = router.root().expect("mounted root");
    println!("mounted after back:     {}", tree.tag(root).expect("tag"));
}
