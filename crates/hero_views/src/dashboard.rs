//! Dashboard: a short preview of the top heroes.

use crate::{Loadable, Navigation};
use hero_service::HeroService;
use hero_types::{AppRoute, Hero, HeroId};

/// Tiles shown when no size is configured.
pub const DEFAULT_DASHBOARD_SIZE: usize = 4;

/// The first `size` heroes, in service order.
pub fn top_heroes(mut heroes: Vec<Hero>, size: usize) -> Vec<Hero> {
    heroes.truncate(size);
    heroes
}

#[derive(Clone)]
pub struct DashboardViewModel<S, N> {
    service: S,
    navigation: N,
    size: usize,
}

impl<S: HeroService, N: Navigation> DashboardViewModel<S, N> {
    pub fn new(service: S, navigation: N) -> Self {
        Self {
            service,
            navigation,
            size: DEFAULT_DASHBOARD_SIZE,
        }
    }

    /// Override the number of tiles.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Fetch the heroes to show as tiles.
    pub async fn load(&self) -> Loadable<Vec<Hero>> {
        match self.service.get_heroes().await {
            Ok(heroes) => Loadable::Ready(top_heroes(heroes, self.size)),
            Err(e) => {
                log::error!("dashboard: failed to load heroes: {e}");
                Loadable::Failed(e.to_string())
            }
        }
    }

    /// Open the detail view for a tile.
    pub fn select(&self, id: HeroId) {
        self.navigation.navigate(AppRoute::Detail(id));
    }
}
