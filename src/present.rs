//! Presenting new surfaces on top of whatever is active.

use crate::error::Result;
use crate::resolver::{SurfaceGraph, SurfaceResolver};

/// Lets the host application present a surface modally.
pub trait SurfacePresenter: SurfaceGraph {
    /// Presents `surface` on top of `on`.
    fn present(&mut self, on: &Self::Surface, surface: Self::Surface, animated: bool);

    /// Wraps `surface` in a new navigation container and returns the container.
    fn wrap_in_navigation(&mut self, surface: Self::Surface) -> Self::Surface;
}

/// Options for [`present_on_top`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentOptions {
    /// Wrap the surface in a navigation container first, so it gets a navigation bar.
    pub with_navigation: bool,
    pub animated: bool,
}

/// Presents `surface` on the currently active surface, from anywhere in the application.
///
/// Fails with `NoActiveSurface` (without presenting anything) if the graph has no root.
pub fn present_on_top<G: SurfacePresenter>(
    graph: &mut G,
    resolver: &SurfaceResolver,
    surface: G::Surface,
    options: PresentOptions,
) -> Result<()> {
    let top = resolver.resolve_from_root(graph)?;
    let surface = if options.with_navigation {
        graph.wrap_in_navigation(surface)
    } else {
        surface
    };
    graph.present(&top, surface, options.animated);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::headless::HeadlessGraph;
    use crate::resolver::Container;

    #[test]
    fn presents_on_active_surface() {
        let mut graph = HeadlessGraph::new();
        let root = graph.add_surface("root");
        let modal = graph.add_surface("modal");
        let sheet = graph.add_surface("sheet");
        graph.set_root(Some(root));
        graph.present_on(root, modal);

        let resolver = SurfaceResolver::default();
        present_on_top(&mut graph, &resolver, sheet, PresentOptions::default()).unwrap();

        assert_eq!(graph.presented(&modal), Some(sheet));
        assert_eq!(resolver.resolve_from_root(&graph).unwrap(), sheet);
    }

    #[test]
    fn wraps_in_navigation() {
        let mut graph = HeadlessGraph::new();
        let root = graph.add_surface("root");
        let detail = graph.add_surface("detail");
        graph.set_root(Some(root));

        let resolver = SurfaceResolver::default();
        let options = PresentOptions {
            with_navigation: true,
            animated: true,
        };
        present_on_top(&mut graph, &resolver, detail, options).unwrap();

        let nav = graph.presented(&root).expect("something should be presented on root");
        assert_eq!(graph.container(&nav), Container::Navigation(Some(detail)));
        assert_eq!(resolver.resolve_from_root(&graph).unwrap(), detail);
        assert_eq!(graph.was_animated(nav), Some(true));
    }

    #[test]
    fn nothing_to_present_on() {
        let mut graph = HeadlessGraph::new();
        let orphan = graph.add_surface("orphan");
        let result = present_on_top(&mut graph, &SurfaceResolver::default(), orphan, PresentOptions::default());
        assert!(matches!(result, Err(Error::NoActiveSurface)));
        assert_eq!(graph.surface_count(), 1, "no navigation container should have been created");
    }
}
