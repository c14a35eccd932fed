//! Hero data service for the Tour of Heroes application.
//!
//! The [`HeroService`] trait is the boundary between the views and
//! wherever heroes live. [`InMemoryHeroService`] is the mock backend
//! the application ships with.

mod memory;
mod roster;

pub use memory::InMemoryHeroService;
pub use roster::{check_roster, load_heroes_from_json, mock_heroes};

use hero_types::{Hero, HeroId, Result};

/// Asynchronous access to the hero collection.
///
/// Every call resolves exactly once. Futures are not `Send`; the
/// application runs on a single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait HeroService: Clone + 'static {
    /// The whole collection, in storage order.
    async fn get_heroes(&self) -> Result<Vec<Hero>>;

    /// A single hero, or `HeroError::NotFound`.
    async fn get_hero(&self, id: HeroId) -> Result<Hero>;

    /// Store a new name for an existing hero and return the stored record.
    async fn update_hero(&self, hero: &Hero) -> Result<Hero>;

    /// Create a hero with a freshly assigned id.
    async fn add_hero(&self, name: &str) -> Result<Hero>;

    /// Remove a hero and return it.
    async fn delete_hero(&self, id: HeroId) -> Result<Hero>;
}
