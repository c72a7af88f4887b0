//! Finding the surface the user is looking at.

use crate::error::{Error, Result};

/// How a surface relates to its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container<S> {
    /// Not a container.
    Plain,
    /// A navigation stack; holds the topmost child, if any.
    Navigation(Option<S>),
    /// A tab container; holds the selected child, if any.
    Tabs(Option<S>),
}

/// Read-only access to the host application’s presentation hierarchy.
///
/// Implementations must only be queried from the UI thread; the host owns and mutates the
/// relations, toasts only read them.
pub trait SurfaceGraph {
    /// A handle to a screen or screen container.
    type Surface: Clone;

    /// The application’s top-level surface, or `None` if there isn’t one yet.
    fn root(&self) -> Option<Self::Surface>;

    /// The surface currently presented modally on top of `surface`.
    fn presented(&self, surface: &Self::Surface) -> Option<Self::Surface>;

    /// The container semantics of `surface`.
    fn container(&self, surface: &Self::Surface) -> Container<Self::Surface>;
}

/// Walks presented surfaces from a root to find the topmost active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceResolver {
    max_depth: usize,
}

impl Default for SurfaceResolver {
    fn default() -> Self {
        SurfaceResolver { max_depth: 64 }
    }
}

impl SurfaceResolver {
    /// Creates a resolver that gives up after following `max_depth` presented surfaces.
    pub fn new(max_depth: usize) -> SurfaceResolver {
        SurfaceResolver { max_depth }
    }

    /// Resolves the active surface starting at `root`.
    ///
    /// Each presented surface is resolved through its container once: navigation stacks yield
    /// their topmost child and tab containers their selected child. Empty containers are active
    /// themselves. The root is never resolved through its container.
    pub fn resolve<G: SurfaceGraph>(
        &self,
        graph: &G,
        root: Option<G::Surface>,
    ) -> Result<G::Surface> {
        let mut current = root.ok_or(Error::NoActiveSurface)?;
        let mut depth = 0;

        while let Some(presented) = graph.presented(&current) {
            depth += 1;
            if depth > self.max_depth {
                return Err(Error::PresentationDepthExceeded(self.max_depth));
            }

            current = match graph.container(&presented) {
                Container::Navigation(Some(child)) | Container::Tabs(Some(child)) => child,
                Container::Navigation(None) | Container::Tabs(None) | Container::Plain => presented,
            };
        }

        Ok(current)
    }

    /// Resolves the active surface starting at the graph’s root.
    pub fn resolve_from_root<G: SurfaceGraph>(&self, graph: &G) -> Result<G::Surface> {
        self.resolve(graph, graph.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessGraph;

    #[test]
    fn flat_stack_is_root() {
        let mut graph = HeadlessGraph::new();
        let root = graph.add_surface("root");
        graph.set_root(Some(root));
        assert_eq!(SurfaceResolver::default().resolve_from_root(&graph).unwrap(), root);
    }

    #[test]
    fn presented_tab_container_yields_selected_child() {
        let mut graph = HeadlessGraph::new();
        let root = graph.add_surface("root");
        let a = graph.add_surface("a");
        let x = graph.add_surface("x");
        let tabs = graph.add_tabs("tabs", vec![a, x], Some(1));
        graph.set_root(Some(root));
        graph.present_on(root, tabs);

        assert_eq!(SurfaceResolver::default().resolve_from_root(&graph).unwrap(), x);
    }

    #[test]
    fn presented_container_without_selection_is_active() {
        let mut graph = HeadlessGraph::new();
        let root = graph.add_surface("root");
        let a = graph.add_surface("a");
        let tabs = graph.add_tabs("tabs", vec![a], None);
        let nav = graph.add_navigation("nav", vec![]);
        graph.set_root(Some(root));
        graph.present_on(root, tabs);
        assert_eq!(SurfaceResolver::default().resolve_from_root(&graph).unwrap(), tabs);

        graph.present_on(root, nav);
        assert_eq!(SurfaceResolver::default().resolve_from_root(&graph).unwrap(), nav);
    }

    #[test]
    fn presented_navigation_yields_topmost_child() {
        let mut graph = HeadlessGraph::new();
        let root = graph.add_surface("root");
        let first = graph.add_surface("first");
        let second = graph.add_surface("second");
        let nav = graph.add_navigation("nav", vec![first, second]);
        graph.set_root(Some(root));
        graph.present_on(root, nav);

        assert_eq!(SurfaceResolver::default().resolve_from_root(&graph).unwrap(), second);
    }

    #[test]
    fn follows_host_mutations() {
        let mut graph = HeadlessGraph::new();
        let root = graph.add_surface("root");
        let list = graph.add_surface("list");
        let detail = graph.add_surface("detail");
        let nav = graph.add_navigation("nav", vec![list]);
        graph.set_root(Some(root));
        graph.present_on(root, nav);
        let resolver = SurfaceResolver::default();
        assert_eq!(resolver.resolve_from_root(&graph).unwrap(), list);

        graph.push(nav, detail);
        assert_eq!(resolver.resolve_from_root(&graph).unwrap(), detail);

        graph.dismiss(root);
        assert_eq!(resolver.resolve_from_root(&graph).unwrap(), root);
    }

    #[test]
    fn root_container_is_not_descended() {
        let mut graph = HeadlessGraph::new();
        let a = graph.add_surface("a");
        let tabs = graph.add_tabs("tabs", vec![a], Some(0));
        graph.set_root(Some(tabs));

        assert_eq!(SurfaceResolver::default().resolve_from_root(&graph).unwrap(), tabs);
    }

    #[test]
    fn modal_over_modal() {
        let mut graph = HeadlessGraph::new();
        let root = graph.add_surface("root");
        let settings = graph.add_surface("settings");
        let picker = graph.add_surface("picker");
        let nav = graph.add_navigation("nav", vec![settings]);
        graph.set_root(Some(root));
        graph.present_on(root, nav);
        // presented on the child that the navigation container resolved to
        graph.present_on(settings, picker);

        assert_eq!(SurfaceResolver::default().resolve_from_root(&graph).unwrap(), picker);
    }

    #[test]
    fn missing_root_is_no_active_surface() {
        let graph = HeadlessGraph::new();
        assert!(matches!(
            SurfaceResolver::default().resolve_from_root(&graph),
            Err(Error::NoActiveSurface)
        ));
    }

    #[test]
    fn cycles_are_bounded() {
        let mut graph = HeadlessGraph::new();
        let a = graph.add_surface("a");
        let b = graph.add_surface("b");
        graph.set_root(Some(a));
        graph.present_on(a, b);
        graph.present_on(b, a);

        assert!(matches!(
            SurfaceResolver::new(8).resolve_from_root(&graph),
            Err(Error::PresentationDepthExceeded(8))
        ));
    }

    #[test]
    fn resolution_does_not_mutate() {
        let mut graph = HeadlessGraph::new();
        let root = graph.add_surface("root");
        let modal = graph.add_surface("modal");
        graph.set_root(Some(root));
        graph.present_on(root, modal);

        let before = graph.clone();
        SurfaceResolver::default().resolve_from_root(&graph).unwrap();
        assert_eq!(graph, before);
    }
}
