//! In-memory mock backend.

use crate::HeroService;
use crate::roster::{check_roster, load_heroes_from_json, mock_heroes};
use hero_types::{Hero, HeroError, HeroId, Result, normalize_name};
use std::cell::RefCell;
use std::rc::Rc;

/// Hero collection held in memory and shared by every clone.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHeroService {
    heroes: Rc<RefCell<Vec<Hero>>>,
}

impl InMemoryHeroService {
    /// Create a service over the given heroes.
    ///
    /// Names are trimmed; blank names and duplicate ids are rejected.
    pub fn new(heroes: Vec<Hero>) -> Result<Self> {
        Ok(Self::from_checked(check_roster(heroes)?))
    }

    /// Create a service seeded with the builtin roster.
    pub fn with_mock_heroes() -> Self {
        Self::from_checked(mock_heroes())
    }

    /// Create a service seeded from a JSON roster.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_checked(load_heroes_from_json(json)?))
    }

    fn from_checked(heroes: Vec<Hero>) -> Self {
        Self {
            heroes: Rc::new(RefCell::new(heroes)),
        }
    }

    /// Number of heroes currently stored.
    pub fn len(&self) -> usize {
        self.heroes.borrow().len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.heroes.borrow().is_empty()
    }

    /// Synchronous view of a stored hero.
    pub fn peek(&self, id: HeroId) -> Option<Hero> {
        self.heroes.borrow().iter().find(|h| h.id == id).cloned()
    }

    fn next_id(heroes: &[Hero]) -> Result<HeroId> {
        match heroes.iter().map(|h| h.id).max() {
            None => Ok(HeroId::FIRST),
            Some(max) => max
                .next()
                .ok_or_else(|| HeroError::Unavailable("hero id space exhausted".to_string())),
        }
    }
}

impl PartialEq for InMemoryHeroService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.heroes, &other.heroes)
    }
}

impl HeroService for InMemoryHeroService {
    async fn get_heroes(&self) -> Result<Vec<Hero>> {
        let heroes = self.heroes.borrow().clone();
        log::debug!("fetched {} heroes", heroes.len());
        Ok(heroes)
    }

    async fn get_hero(&self, id: HeroId) -> Result<Hero> {
        match self.peek(id) {
            Some(hero) => {
                log::debug!("fetched hero id={id}");
                Ok(hero)
            }
            None => {
                log::warn!("hero id={id} not found");
                Err(HeroError::NotFound(id))
            }
        }
    }

    async fn update_hero(&self, hero: &Hero) -> Result<Hero> {
        let name = normalize_name(&hero.name)?;

        let mut heroes = self.heroes.borrow_mut();
        let stored = heroes
            .iter_mut()
            .find(|h| h.id == hero.id)
            .ok_or(HeroError::NotFound(hero.id))?;
        stored.name = name;

        log::info!("updated hero id={}", stored.id);
        Ok(stored.clone())
    }

    async fn add_hero(&self, name: &str) -> Result<Hero> {
        let name = normalize_name(name)?;

        let mut heroes = self.heroes.borrow_mut();
        let hero = Hero::new(Self::next_id(&heroes)?, name);
        heroes.push(hero.clone());

        log::info!("added hero id={}", hero.id);
        Ok(hero)
    }

    async fn delete_hero(&self, id: HeroId) -> Result<Hero> {
        let mut heroes = self.heroes.borrow_mut();
        let index = heroes
            .iter()
            .position(|h| h.id == id)
            .ok_or(HeroError::NotFound(id))?;
        let hero = heroes.remove(index);

        log::info!("deleted hero id={id}");
        Ok(hero)
    }
}
