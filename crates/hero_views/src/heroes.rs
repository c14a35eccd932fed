//! Heroes list: every hero, with selection, add and delete.

use crate::Navigation;
use hero_service::HeroService;
use hero_types::{AppRoute, Hero, HeroError, HeroId, normalize_name};

/// State of the heroes list screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeroesState {
    pub heroes: Vec<Hero>,
    pub selected: Option<HeroId>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Changes applied to [`HeroesState`] once an operation resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum HeroesAction {
    Loaded(Vec<Hero>),
    Select(HeroId),
    Added(Hero),
    Deleted(HeroId),
    Failed(String),
}

impl HeroesState {
    /// Initial state while the first fetch is pending.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// The selected hero, if it is still in the list.
    pub fn selected_hero(&self) -> Option<&Hero> {
        let id = self.selected?;
        self.heroes.iter().find(|h| h.id == id)
    }

    pub fn apply(mut self, action: HeroesAction) -> Self {
        match action {
            HeroesAction::Loaded(heroes) => {
                self.heroes = heroes;
                self.loading = false;
                self.error = None;
                if self.selected_hero().is_none() {
                    self.selected = None;
                }
            }
            HeroesAction::Select(id) => {
                if self.heroes.iter().any(|h| h.id == id) {
                    self.selected = Some(id);
                }
            }
            HeroesAction::Added(hero) => {
                self.heroes.push(hero);
                self.error = None;
            }
            HeroesAction::Deleted(id) => {
                self.heroes.retain(|h| h.id != id);
                if self.selected == Some(id) {
                    self.selected = None;
                }
                self.error = None;
            }
            HeroesAction::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
        self
    }
}

#[derive(Clone)]
pub struct HeroesViewModel<S, N> {
    service: S,
    navigation: N,
}

impl<S: HeroService, N: Navigation> HeroesViewModel<S, N> {
    pub fn new(service: S, navigation: N) -> Self {
        Self {
            service,
            navigation,
        }
    }

    pub async fn load(&self) -> HeroesAction {
        match self.service.get_heroes().await {
            Ok(heroes) => HeroesAction::Loaded(heroes),
            Err(e) => {
                log::error!("heroes: failed to load: {e}");
                HeroesAction::Failed(e.to_string())
            }
        }
    }

    /// Add a hero. Blank names never reach the service and yield `None`.
    pub async fn add(&self, name: &str) -> Option<HeroesAction> {
        let name = match normalize_name(name) {
            Ok(name) => name,
            Err(HeroError::EmptyName) => return None,
            Err(e) => return Some(HeroesAction::Failed(e.to_string())),
        };

        Some(match self.service.add_hero(&name).await {
            Ok(hero) => HeroesAction::Added(hero),
            Err(e) => {
                log::error!("heroes: failed to add {name:?}: {e}");
                HeroesAction::Failed(e.to_string())
            }
        })
    }

    pub async fn delete(&self, id: HeroId) -> HeroesAction {
        match self.service.delete_hero(id).await {
            Ok(_) => HeroesAction::Deleted(id),
            // Already gone: the list only needs to catch up.
            Err(HeroError::NotFound(_)) => HeroesAction::Deleted(id),
            Err(e) => {
                log::error!("heroes: failed to delete id={id}: {e}");
                HeroesAction::Failed(e.to_string())
            }
        }
    }

    /// Open the detail view of the selected hero.
    pub fn goto_detail(&self, state: &HeroesState) {
        match state.selected_hero() {
            Some(hero) => self.navigation.navigate(AppRoute::Detail(hero.id)),
            None => log::warn!("heroes: no hero selected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryNavigation;
    use crate::testing::CountingService;
    use futures::executor::block_on;
    use hero_service::mock_heroes;

    fn setup() -> (
        HeroesViewModel<CountingService, MemoryNavigation>,
        CountingService,
        MemoryNavigation,
    ) {
        let service = CountingService::new(mock_heroes());
        let nav = MemoryNavigation::new(AppRoute::Heroes);
        (
            HeroesViewModel::new(service.clone(), nav.clone()),
            service,
            nav,
        )
    }

    fn loaded(vm: &HeroesViewModel<CountingService, MemoryNavigation>) -> HeroesState {
        HeroesState::loading().apply(block_on(vm.load()))
    }

    #[test]
    fn test_load_lists_all_heroes() {
        let (vm, _, _) = setup();

        let state = loaded(&vm);

        assert!(!state.loading);
        assert_eq!(state.heroes.len(), 10);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_select_and_goto_detail() {
        let (vm, _, nav) = setup();
        let state = loaded(&vm).apply(HeroesAction::Select(HeroId(14)));

        assert_eq!(state.selected_hero().unwrap().name, "Celeritas");

        vm.goto_detail(&state);
        assert_eq!(nav.current(), AppRoute::Detail(HeroId(14)));
    }

    #[test]
    fn test_goto_detail_without_selection_stays() {
        let (vm, _, nav) = setup();

        vm.goto_detail(&loaded(&vm));

        assert_eq!(nav.current(), AppRoute::Heroes);
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let (vm, _, _) = setup();

        let state = loaded(&vm).apply(HeroesAction::Select(HeroId(99)));

        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_add_appends_to_list_and_service() {
        let (vm, service, _) = setup();
        let state = loaded(&vm);

        let action = block_on(vm.add("  Storm ")).unwrap();
        let state = state.apply(action);

        assert_eq!(state.heroes.last(), Some(&Hero::new(21, "Storm")));
        assert_eq!(service.inner.len(), 11);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let (vm, service, _) = setup();
        let calls = service.calls();

        assert_eq!(block_on(vm.add("   ")), None);
        assert_eq!(service.calls(), calls);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let (vm, service, _) = setup();
        let state = loaded(&vm).apply(HeroesAction::Select(HeroId(12)));

        let state = state.apply(block_on(vm.delete(HeroId(12))));

        assert_eq!(state.selected, None);
        assert!(state.heroes.iter().all(|h| h.id != HeroId(12)));
        assert!(service.inner.peek(HeroId(12)).is_none());
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let (vm, _, _) = setup();
        let state = loaded(&vm).apply(HeroesAction::Select(HeroId(12)));

        let state = state.apply(block_on(vm.delete(HeroId(13))));

        assert_eq!(state.selected, Some(HeroId(12)));
        assert_eq!(state.heroes.len(), 9);
    }

    #[test]
    fn test_service_failure_keeps_list() {
        let (vm, service, _) = setup();
        let state = loaded(&vm);
        service.offline.set(true);

        let state = state.apply(block_on(vm.delete(HeroId(11))));

        assert_eq!(state.heroes.len(), 10);
        assert!(state.error.is_some());

        service.offline.set(false);
        let state = state.apply(block_on(vm.load()));
        assert!(state.error.is_none());
    }
}
