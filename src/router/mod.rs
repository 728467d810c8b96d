//! Path router - resolves the current location to exactly one top-level
//! view and keeps the mounted view in sync with history navigation.
//!
//! Two transitions only: [`Router::navigate_to`] pushes a history entry
//! and resolves, [`Router::on_history_popped`] resolves without pushing.
//! Resolution scans the static route table in declaration order for an
//! exact path match; an unmatched path falls back to the first route, so
//! lookups are total and the root slot is never left unset.

mod history;

pub use history::{HistoryApi, MemoryHistory};

use spark_signals::{signal, Signal};
use thiserror::Error;
use tracing::debug;

use crate::component::{ComponentTree, InstanceId, TreeError};

// =============================================================================
// Routes
// =============================================================================

/// One (path, view) pair. Paths match by exact string equality, never by
/// prefix or pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub view: String,
}

impl Route {
    pub fn new(path: &str, view: &str) -> Self {
        Self {
            path: path.to_string(),
            view: view.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// The fallback is the first route, so the table cannot be empty.
    #[error("route table is empty")]
    EmptyRouteTable,
}

// =============================================================================
// Router
// =============================================================================

/// Resolves paths against a static route table and mounts the matched
/// view as the tree's root content.
pub struct Router<H: HistoryApi> {
    routes: Vec<Route>,
    history: H,
    current_path: Signal<String>,
    root: Option<InstanceId>,
}

impl<H: HistoryApi> Router<H> {
    /// Build a router over a fixed route table. The table cannot change
    /// afterwards; its first entry doubles as the fallback view.
    pub fn new(routes: Vec<Route>, history: H) -> Result<Self, RouterError> {
        if routes.is_empty() {
            return Err(RouterError::EmptyRouteTable);
        }
        let current_path = signal(history.location());
        Ok(Self {
            routes,
            history,
            current_path,
            root: None,
        })
    }

    /// Signal tracking the most recently resolved path.
    pub fn current_path(&self) -> Signal<String> {
        self.current_path.clone()
    }

    /// The currently mounted root view, if any resolution has happened.
    pub fn root(&self) -> Option<InstanceId> {
        self.root
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Programmatic navigation: push a new history entry, then resolve.
    pub fn navigate_to(
        &mut self,
        tree: &mut ComponentTree,
        path: &str,
    ) -> Result<InstanceId, TreeError> {
        self.history.push(path);
        self.resolve(tree)
    }

    /// Back/forward navigation arrived from the host: resolve the current
    /// location without pushing.
    pub fn on_history_popped(&mut self, tree: &mut ComponentTree) -> Result<InstanceId, TreeError> {
        self.resolve(tree)
    }

    /// Simulate pressing the back button: move the history cursor and
    /// resolve. Returns `None` when already at the oldest entry.
    pub fn pop_back(&mut self, tree: &mut ComponentTree) -> Result<Option<InstanceId>, TreeError> {
        if !self.history.back() {
            return Ok(None);
        }
        self.on_history_popped(tree).map(Some)
    }

    /// Simulate pressing the forward button.
    pub fn pop_forward(
        &mut self,
        tree: &mut ComponentTree,
    ) -> Result<Option<InstanceId>, TreeError> {
        if !self.history.forward() {
            return Ok(None);
        }
        self.on_history_popped(tree).map(Some)
    }

    /// Intercept an anchor click. Only same-origin paths flagged for
    /// client-side handling are taken over; everything else stays with
    /// the host. Returns true when the click was handled (the host must
    /// then prevent the default navigation).
    pub fn handle_link_click(
        &mut self,
        tree: &mut ComponentTree,
        href: &str,
        data_link: bool,
    ) -> Result<bool, TreeError> {
        if !data_link || !href.starts_with('/') {
            return Ok(false);
        }
        self.navigate_to(tree, href)?;
        Ok(true)
    }

    /// Resolve the current location: first exact match in declaration
    /// order, else the first route. Replaces the root view wholesale.
    fn resolve(&mut self, tree: &mut ComponentTree) -> Result<InstanceId, TreeError> {
        let path = self.history.location();
        let route = self
            .routes
            .iter()
            .find(|route| route.path == path)
            .unwrap_or(&self.routes[0]);
        debug!(%path, view = %route.view, "route resolved");

        let view = route.view.clone();
        if let Some(old) = self.root.take() {
            tree.remove(old)?;
        }
        let id = tree.create(&view)?;
        tree.attach(id, None)?;
        self.root = Some(id);
        self.current_path.set(path);
        Ok(id)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, ComponentRegistry, View};
    use crate::dom::{Node, StyleSheet};
    use std::rc::Rc;

    struct Static(&'static str);

    impl Component for Static {
        fn style(&self, _view: &View) -> StyleSheet {
            StyleSheet::new("")
        }

        fn content(&self, _view: &View) -> Node {
            Node::element("section").with_text(self.0)
        }
    }

    fn setup() -> (ComponentTree, Vec<Route>) {
        let mut registry = ComponentRegistry::new();
        registry.define("view-home", || Static("home")).unwrap();
        registry.define("view-uren", || Static("uren")).unwrap();
        registry
            .define("view-contact", || Static("contact"))
            .unwrap();
        let tree = ComponentTree::new(Rc::new(registry));
        let routes = vec![
            Route::new("/", "view-home"),
            Route::new("/uren", "view-uren"),
            Route::new("/contact", "view-contact"),
        ];
        (tree, routes)
    }

    fn mounted_text(tree: &ComponentTree, id: InstanceId) -> String {
        tree.shadow(id)
            .unwrap()
            .content()
            .unwrap()
            .text()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_empty_route_table_rejected() {
        assert_eq!(
            Router::new(vec![], MemoryHistory::new()).err(),
            Some(RouterError::EmptyRouteTable)
        );
    }

    #[test]
    fn test_root_path_resolves_home() {
        let (mut tree, routes) = setup();
        let mut router = Router::new(routes, MemoryHistory::new()).unwrap();

        let id = router.on_history_popped(&mut tree).unwrap();
        assert_eq!(mounted_text(&tree, id), "home");
        assert_eq!(router.current_path().get(), "/");
    }

    #[test]
    fn test_unmatched_path_falls_back_to_first_route() {
        let (mut tree, routes) = setup();
        let mut router =
            Router::new(routes, MemoryHistory::starting_at("/unknown")).unwrap();

        let id = router.on_history_popped(&mut tree).unwrap();
        assert_eq!(mounted_text(&tree, id), "home");
        // The slot is mounted, never left unset.
        assert!(router.root().is_some());
    }

    #[test]
    fn test_navigate_replaces_root_wholesale() {
        let (mut tree, routes) = setup();
        let mut router = Router::new(routes, MemoryHistory::new()).unwrap();

        let home = router.on_history_popped(&mut tree).unwrap();
        let uren = router.navigate_to(&mut tree, "/uren").unwrap();

        assert_eq!(mounted_text(&tree, uren), "uren");
        assert!(!tree.is_attached(home));
        assert_eq!(tree.instance_count(), 1);
    }

    #[test]
    fn test_back_restores_previous_view_without_pushing() {
        let (mut tree, routes) = setup();
        let mut router = Router::new(routes, MemoryHistory::new()).unwrap();
        router.on_history_popped(&mut tree).unwrap();
        router.navigate_to(&mut tree, "/contact").unwrap();
        assert_eq!(router.history().len(), 2);

        let id = router.pop_back(&mut tree).unwrap().unwrap();
        assert_eq!(mounted_text(&tree, id), "home");
        // Pop resolves without pushing a new entry.
        assert_eq!(router.history().len(), 2);

        let id = router.pop_forward(&mut tree).unwrap().unwrap();
        assert_eq!(mounted_text(&tree, id), "contact");
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn test_pop_back_at_oldest_entry() {
        let (mut tree, routes) = setup();
        let mut router = Router::new(routes, MemoryHistory::new()).unwrap();
        router.on_history_popped(&mut tree).unwrap();
        assert_eq!(router.pop_back(&mut tree).unwrap(), None);
    }

    #[test]
    fn test_link_click_interception() {
        let (mut tree, routes) = setup();
        let mut router = Router::new(routes, MemoryHistory::new()).unwrap();
        router.on_history_popped(&mut tree).unwrap();

        // Flagged same-origin link: handled.
        assert!(router
            .handle_link_click(&mut tree, "/uren", true)
            .unwrap());
        assert_eq!(router.current_path().get(), "/uren");

        // Unflagged link: left to the host.
        assert!(!router
            .handle_link_click(&mut tree, "/contact", false)
            .unwrap());
        // Cross-origin link: left to the host.
        assert!(!router
            .handle_link_click(&mut tree, "https://festina.com/en-GB", true)
            .unwrap());
        assert_eq!(router.current_path().get(), "/uren");
    }

    #[test]
    fn test_current_path_signal_observable() {
        let (mut tree, routes) = setup();
        let mut router = Router::new(routes, MemoryHistory::new()).unwrap();

        let path = router.current_path();
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let seen_in_effect = seen.clone();
        let stop = spark_signals::effect(move || {
            seen_in_effect.borrow_mut().push(path.get());
        });

        router.on_history_popped(&mut tree).unwrap();
        router.navigate_to(&mut tree, "/uren").unwrap();
        stop();

        assert!(seen.borrow().contains(&"/uren".to_string()));
    }
}
