pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{diagnostics::TracingSink, http::ReqwestTransport, memory::InMemoryTransport};
pub use config::{ApiConfig, Settings};
pub use crate::core::{
    hero_service::HeroService, heroes_component::HeroesComponent, messages::MessageService,
};
pub use domain::model::{Hero, HeroId, HeroRef, NewHero};
pub use utils::error::{HeroError, Result};
