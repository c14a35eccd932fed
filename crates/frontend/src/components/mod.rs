//! Reusable UI components.

mod error_banner;
mod hero_editor;
mod hero_item;
mod hero_tile;
mod loading;

pub use error_banner::ErrorBanner;
pub use hero_editor::HeroEditor;
pub use hero_item::HeroListItem;
pub use hero_tile::HeroTile;
pub use loading::Loading;
