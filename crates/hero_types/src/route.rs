//! Application routes and their URL paths.

use crate::HeroId;

/// A navigable screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Heroes,
    Detail(HeroId),
    NotFound,
}

impl AppRoute {
    /// Route shown when the application starts at `/`.
    pub const DEFAULT: AppRoute = AppRoute::Dashboard;

    /// URL path for this route.
    pub fn path(&self) -> String {
        match self {
            AppRoute::Dashboard => "/dashboard".to_string(),
            AppRoute::Heroes => "/heroes".to_string(),
            AppRoute::Detail(id) => format!("/detail/{id}"),
            AppRoute::NotFound => "/404".to_string(),
        }
    }
}
