pub mod hero_service;
pub mod heroes_component;
pub mod messages;
pub mod recovery;

pub use crate::domain::model::{Hero, HeroId, HeroRef, NewHero};
pub use crate::domain::ports::{ConfigProvider, DiagnosticSink, HeroTransport};
pub use crate::utils::error::Result;
