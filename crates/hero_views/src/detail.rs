//! Hero detail: load one hero by route parameter and edit its name.

use crate::{Navigation, RequestTracker};
use hero_service::HeroService;
use hero_types::{Hero, HeroError, HeroId, Result, normalize_name};

/// What the detail screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Hero),
    NotFound(HeroId),
    /// The route parameter was not a hero id.
    InvalidId(String),
    Failed(String),
}

impl DetailState {
    pub fn hero(&self) -> Option<&Hero> {
        match self {
            DetailState::Loaded(hero) => Some(hero),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct HeroDetailViewModel<S, N> {
    service: S,
    navigation: N,
    tracker: RequestTracker,
    edits: RequestTracker,
}

impl<S: HeroService, N: Navigation> HeroDetailViewModel<S, N> {
    pub fn new(service: S, navigation: N) -> Self {
        Self {
            service,
            navigation,
            tracker: RequestTracker::new(),
            edits: RequestTracker::new(),
        }
    }

    /// Resolve the hero named by a raw `id` route parameter.
    ///
    /// Returns `None` when another `load` started (or `cancel` was
    /// called) before this one resolved; the caller must drop it.
    pub async fn load(&self, raw_id: &str) -> Option<DetailState> {
        let ticket = self.tracker.begin();

        let id = match raw_id.parse::<HeroId>() {
            Ok(id) => id,
            Err(_) => {
                log::warn!("detail: invalid id parameter {raw_id:?}");
                return Some(DetailState::InvalidId(raw_id.to_string()));
            }
        };

        let state = match self.service.get_hero(id).await {
            Ok(hero) => DetailState::Loaded(hero),
            Err(HeroError::NotFound(id)) => DetailState::NotFound(id),
            Err(e) => {
                log::error!("detail: failed to load hero id={id}: {e}");
                DetailState::Failed(e.to_string())
            }
        };

        if !self.tracker.is_current(ticket) {
            log::debug!("detail: dropping stale result for id={id}");
            return None;
        }
        Some(state)
    }

    /// Drop whatever load is still in flight.
    pub fn cancel(&self) {
        self.tracker.cancel();
    }

    /// Store a new name for `hero`. Blank names are rejected before
    /// reaching the service.
    ///
    /// Returns `None` when a later `rename` started before this one
    /// resolved; only the newest edit should reach the page.
    pub async fn rename(&self, hero: &Hero, name: &str) -> Option<Result<Hero>> {
        let ticket = self.edits.begin();
        let name = match normalize_name(name) {
            Ok(name) => name,
            Err(e) => return Some(Err(e)),
        };

        let stored = self.service.update_hero(&hero.renamed(name)).await;

        if !self.edits.is_current(ticket) {
            log::debug!("detail: dropping superseded rename of hero id={}", hero.id);
            return None;
        }
        Some(stored)
    }

    pub fn go_back(&self) {
        self.navigation.back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingService;
    use crate::{DashboardViewModel, HeroesViewModel, MemoryNavigation};
    use futures::executor::block_on;
    use hero_types::AppRoute;

    fn mr_nice() -> Vec<Hero> {
        vec![Hero::new(11, "Mr. Nice")]
    }

    #[test]
    fn test_load_each_present_id() {
        let heroes = hero_service::mock_heroes();
        let vm = HeroDetailViewModel::new(
            CountingService::new(heroes.clone()),
            MemoryNavigation::default(),
        );

        for hero in heroes {
            let state = block_on(vm.load(&hero.id.to_string())).unwrap();
            assert_eq!(state, DetailState::Loaded(hero));
        }
    }

    #[test]
    fn test_load_absent_id_is_not_found() {
        let vm = HeroDetailViewModel::new(CountingService::new(mr_nice()), MemoryNavigation::default());

        let state = block_on(vm.load("42")).unwrap();

        assert_eq!(state, DetailState::NotFound(HeroId(42)));
        assert_eq!(state.hero(), None);
    }

    #[test]
    fn test_load_invalid_id_skips_service() {
        let service = CountingService::new(mr_nice());
        let vm = HeroDetailViewModel::new(service.clone(), MemoryNavigation::default());

        let state = block_on(vm.load("abc")).unwrap();

        assert_eq!(state, DetailState::InvalidId("abc".to_string()));
        assert_eq!(service.calls(), 0);
    }

    #[test]
    fn test_load_failure_is_local() {
        let service = CountingService::new(mr_nice());
        service.offline.set(true);
        let vm = HeroDetailViewModel::new(service, MemoryNavigation::default());

        let state = block_on(vm.load("11")).unwrap();

        assert!(matches!(state, DetailState::Failed(_)));
    }

    #[test]
    fn test_superseded_load_is_dropped() {
        let service = CountingService::new(mr_nice());
        service.suspend.set(true);
        let vm = HeroDetailViewModel::new(service, MemoryNavigation::default());

        block_on(async {
            let first = vm.load("11");
            futures::pin_mut!(first);
            assert!(futures::poll!(first.as_mut()).is_pending());

            let second = vm.load("11").await;
            assert_eq!(second, Some(DetailState::Loaded(Hero::new(11, "Mr. Nice"))));

            assert_eq!(first.await, None);
        });
    }

    #[test]
    fn test_cancel_drops_in_flight_result() {
        let service = CountingService::new(mr_nice());
        service.suspend.set(true);
        let vm = HeroDetailViewModel::new(service, MemoryNavigation::default());

        block_on(async {
            let load = vm.load("11");
            futures::pin_mut!(load);
            assert!(futures::poll!(load.as_mut()).is_pending());

            vm.cancel();

            assert_eq!(load.await, None);
        });
    }

    #[test]
    fn test_rename_updates_service_record() {
        let service = CountingService::new(mr_nice());
        let vm = HeroDetailViewModel::new(service.clone(), MemoryNavigation::default());
        let hero = Hero::new(11, "Mr. Nice");

        let stored = block_on(vm.rename(&hero, "Mr. Nicer")).unwrap().unwrap();

        assert_eq!(stored.name, "Mr. Nicer");
        assert_eq!(service.inner.peek(HeroId(11)).unwrap().name, "Mr. Nicer");
    }

    #[test]
    fn test_rename_blank_is_rejected_before_service() {
        let service = CountingService::new(mr_nice());
        let vm = HeroDetailViewModel::new(service.clone(), MemoryNavigation::default());

        let err = block_on(vm.rename(&Hero::new(11, "Mr. Nice"), "  ")).unwrap().unwrap_err();

        assert!(matches!(err, HeroError::EmptyName));
        assert_eq!(service.calls(), 0);
        assert_eq!(service.inner.peek(HeroId(11)).unwrap().name, "Mr. Nice");
    }

    #[test]
    fn test_rename_back_to_shown_name_while_update_pending() {
        let service = CountingService::new(mr_nice());
        service.suspend.set(true);
        let vm = HeroDetailViewModel::new(service.clone(), MemoryNavigation::default());
        let shown = Hero::new(11, "Mr. Nice");

        block_on(async {
            let typed = vm.rename(&shown, "Mr. Nicex");
            futures::pin_mut!(typed);
            assert!(futures::poll!(typed.as_mut()).is_pending());

            let erased = vm.rename(&shown, "Mr. Nice");
            futures::pin_mut!(erased);
            assert!(futures::poll!(erased.as_mut()).is_pending());

            assert!(typed.await.is_none());
            assert_eq!(erased.await.unwrap().unwrap(), shown);
        });

        assert_eq!(service.calls(), 2);
        assert_eq!(service.inner.peek(HeroId(11)), Some(shown));
    }

    #[test]
    fn test_go_back_returns_without_refetch() {
        let service = CountingService::new(hero_service::mock_heroes());
        let nav = MemoryNavigation::new(AppRoute::Heroes);
        let vm = HeroDetailViewModel::new(service.clone(), nav.clone());

        nav.navigate(AppRoute::Detail(HeroId(11)));
        block_on(vm.load("11")).unwrap();
        let calls = service.calls();

        vm.go_back();

        assert_eq!(nav.current(), AppRoute::Heroes);
        assert_eq!(service.calls(), calls);
    }

    #[test]
    fn test_mr_nice_scenario() {
        let service = CountingService::new(mr_nice());
        let nav = MemoryNavigation::default();
        let dashboard = DashboardViewModel::new(service.clone(), nav.clone());
        let detail = HeroDetailViewModel::new(service.clone(), nav.clone());

        // Navigate to /detail/11 from the dashboard tile.
        let tiles = block_on(dashboard.load());
        dashboard.select(tiles.ready().unwrap()[0].id);
        assert_eq!(nav.current().path(), "/detail/11");

        let AppRoute::Detail(id) = nav.current() else {
            panic!("expected detail route");
        };
        let state = block_on(detail.load(&id.to_string())).unwrap();
        let hero = state.hero().unwrap().clone();
        assert_eq!(hero.name, "Mr. Nice");

        block_on(detail.rename(&hero, "Mr. Nicer")).unwrap().unwrap();

        assert_eq!(service.inner.peek(HeroId(11)).unwrap().name, "Mr. Nicer");
        assert_eq!(nav.current(), AppRoute::Detail(HeroId(11)));

        let heroes = HeroesViewModel::new(service, nav);
        let list = crate::HeroesState::loading().apply(block_on(heroes.load()));
        assert_eq!(list.heroes[0].name, "Mr. Nicer");
    }
}
