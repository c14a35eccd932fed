//! Navigation seam between the view models and the router.

use hero_types::AppRoute;
use std::cell::RefCell;
use std::rc::Rc;

/// Something that can move the application between routes.
pub trait Navigation: Clone + 'static {
    /// Push a new route onto the history.
    fn navigate(&self, route: AppRoute);

    /// Return to the previously active route.
    fn back(&self);
}

/// History kept in memory. Clones share the same stack.
#[derive(Clone, Debug)]
pub struct MemoryNavigation {
    entries: Rc<RefCell<Vec<AppRoute>>>,
}

impl MemoryNavigation {
    /// Start a history at the given route.
    pub fn new(start: AppRoute) -> Self {
        Self {
            entries: Rc::new(RefCell::new(vec![start])),
        }
    }

    /// The active route.
    pub fn current(&self) -> AppRoute {
        self.entries
            .borrow()
            .last()
            .copied()
            .unwrap_or(AppRoute::DEFAULT)
    }

    /// Number of entries in the history.
    pub fn depth(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl Default for MemoryNavigation {
    fn default() -> Self {
        Self::new(AppRoute::DEFAULT)
    }
}

impl Navigation for MemoryNavigation {
    fn navigate(&self, route: AppRoute) {
        log::debug!("navigate to {}", route.path());
        self.entries.borrow_mut().push(route);
    }

    fn back(&self) {
        let mut entries = self.entries.borrow_mut();
        // The first entry stays, like a browser tab with nothing behind it.
        if entries.len() > 1 {
            entries.pop();
        }
    }
}
