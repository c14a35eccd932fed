//! Hooks giving pages their view models.

use std::rc::Rc;

use hero_views::{DashboardViewModel, HeroDetailViewModel, HeroesViewModel};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::AppConfig;
use crate::services::{AppContext, AppHeroService, RouterNavigation};

/// Collaborators available to a page rendered inside the app shell.
#[derive(Clone, PartialEq)]
pub struct AppHandle {
    pub service: AppHeroService,
    pub navigation: RouterNavigation,
    pub config: Rc<AppConfig>,
}

impl AppHandle {
    pub fn dashboard(&self) -> DashboardViewModel<AppHeroService, RouterNavigation> {
        DashboardViewModel::new(self.service.clone(), self.navigation.clone())
            .with_size(self.config.dashboard_size)
    }

    pub fn heroes(&self) -> HeroesViewModel<AppHeroService, RouterNavigation> {
        HeroesViewModel::new(self.service.clone(), self.navigation.clone())
    }

    pub fn detail(&self) -> HeroDetailViewModel<AppHeroService, RouterNavigation> {
        HeroDetailViewModel::new(self.service.clone(), self.navigation.clone())
    }
}

/// `None` when rendered outside the router or the service provider.
#[hook]
pub fn use_app() -> Option<AppHandle> {
    let context = use_context::<AppContext>();
    let navigator = use_navigator();

    match (context, navigator) {
        (Some(context), Some(navigator)) => Some(AppHandle {
            service: context.service,
            navigation: RouterNavigation(navigator),
            config: context.config,
        }),
        _ => {
            log::error!("page rendered outside of the application shell");
            None
        }
    }
}
