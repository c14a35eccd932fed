//! Browser-side wiring of the data service and navigation.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use hero_service::{HeroService, InMemoryHeroService};
use hero_types::{AppRoute, Hero, HeroId, Result};
use hero_views::Navigation;
use yew_router::prelude::Navigator;

use crate::app::Route;
use crate::config::AppConfig;

/// The data service used by the running application.
pub type AppHeroService = DelayedHeroService<InMemoryHeroService>;

/// Wraps a service and waits before every call, to behave like a remote backend.
#[derive(Clone, PartialEq)]
pub struct DelayedHeroService<S> {
    inner: S,
    latency_ms: u32,
}

impl<S> DelayedHeroService<S> {
    pub fn new(inner: S, latency_ms: u32) -> Self {
        Self { inner, latency_ms }
    }

    async fn pause(&self) {
        if self.latency_ms > 0 {
            TimeoutFuture::new(self.latency_ms).await;
        }
    }
}

impl<S: HeroService> HeroService for DelayedHeroService<S> {
    async fn get_heroes(&self) -> Result<Vec<Hero>> {
        self.pause().await;
        self.inner.get_heroes().await
    }

    async fn get_hero(&self, id: HeroId) -> Result<Hero> {
        self.pause().await;
        self.inner.get_hero(id).await
    }

    async fn update_hero(&self, hero: &Hero) -> Result<Hero> {
        self.pause().await;
        self.inner.update_hero(hero).await
    }

    async fn add_hero(&self, name: &str) -> Result<Hero> {
        self.pause().await;
        self.inner.add_hero(name).await
    }

    async fn delete_hero(&self, id: HeroId) -> Result<Hero> {
        self.pause().await;
        self.inner.delete_hero(id).await
    }
}

/// [`Navigation`] backed by the browser history through yew_router.
#[derive(Clone, PartialEq)]
pub struct RouterNavigation(pub Navigator);

impl Navigation for RouterNavigation {
    fn navigate(&self, route: AppRoute) {
        log::debug!("navigate to {}", route.path());
        self.0.push(&Route::from(route));
    }

    fn back(&self) {
        self.0.back();
    }
}

/// Application-wide services, provided to every page through a context.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub service: AppHeroService,
    pub config: Rc<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let store = match config.seed_json.as_deref() {
            Some(json) => InMemoryHeroService::from_json(json).unwrap_or_else(|e| {
                log::error!("invalid HEROES_SEED_JSON, using builtin roster: {e}");
                InMemoryHeroService::with_mock_heroes()
            }),
            None => InMemoryHeroService::with_mock_heroes(),
        };
        log::info!("hero service ready with {} heroes", store.len());

        Self {
            service: DelayedHeroService::new(store, config.latency_ms),
            config: Rc::new(config),
        }
    }
}
