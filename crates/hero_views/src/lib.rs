//! Headless view models for the Tour of Heroes screens.
//!
//! Each view model takes its collaborators (a [`HeroService`] and a
//! [`Navigation`]) as constructor parameters and returns plain state
//! values; the Yew pages own the rendering and apply those values.

pub mod dashboard;
pub mod detail;
pub mod heroes;
mod navigation;
mod tracker;

pub use dashboard::{DEFAULT_DASHBOARD_SIZE, DashboardViewModel, top_heroes};
pub use detail::{DetailState, HeroDetailViewModel};
pub use heroes::{HeroesAction, HeroesState, HeroesViewModel};
pub use navigation::{MemoryNavigation, Navigation};
pub use tracker::{RequestTracker, Ticket};

pub use hero_service::HeroService;

/// Something fetched asynchronously for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    /// The fetch failed; the message is for display only.
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}
