//! Page components.

mod dashboard;
mod hero_detail;
mod heroes;
mod not_found;

pub use dashboard::DashboardPage;
pub use hero_detail::HeroDetailPage;
pub use heroes::HeroesPage;
pub use not_found::NotFoundPage;
