use crate::domain::model::{Hero, HeroId, NewHero};
use crate::domain::ports::HeroTransport;
use crate::utils::error::{HeroError, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

const SEED_HEROES: [(HeroId, &str); 10] = [
    (11, "Dr Nice"),
    (12, "Narco"),
    (13, "Bombasto"),
    (14, "Celeritas"),
    (15, "Magneta"),
    (16, "RubberMan"),
    (17, "Dynama"),
    (18, "Dr IQ"),
    (19, "Magma"),
    (20, "Tornado"),
];

/// 記憶體中的假後端，用於離線模式與測試
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    heroes: Mutex<Vec<Hero>>,
}

impl InMemoryTransport {
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self {
            heroes: Mutex::new(heroes),
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            SEED_HEROES
                .iter()
                .map(|(id, name)| Hero::new(*id, *name))
                .collect(),
        )
    }

    fn next_id(heroes: &[Hero]) -> HeroId {
        heroes.iter().map(|h| h.id).max().map_or(11, |max| max + 1)
    }
}

#[async_trait]
impl HeroTransport for InMemoryTransport {
    async fn fetch_all(&self) -> Result<Vec<Hero>> {
        Ok(self.heroes.lock().await.clone())
    }

    async fn fetch_matching(&self, term: &str) -> Result<Vec<Hero>> {
        let needle = term.to_lowercase();
        let heroes = self.heroes.lock().await;
        Ok(heroes
            .iter()
            .filter(|h| h.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn fetch_by_query_id(&self, id: HeroId) -> Result<Vec<Hero>> {
        let heroes = self.heroes.lock().await;
        Ok(heroes.iter().filter(|h| h.id == id).cloned().collect())
    }

    async fn fetch_one(&self, id: HeroId) -> Result<Hero> {
        let heroes = self.heroes.lock().await;
        heroes
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or(HeroError::NotFound { id })
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero> {
        let mut heroes = self.heroes.lock().await;
        let created = Hero::new(Self::next_id(&heroes), hero.name.clone());
        heroes.push(created.clone());
        Ok(created)
    }

    async fn replace(&self, hero: &Hero) -> Result<()> {
        let mut heroes = self.heroes.lock().await;
        let existing = heroes
            .iter_mut()
            .find(|h| h.id == hero.id)
            .ok_or(HeroError::NotFound { id: hero.id })?;
        existing.name = hero.name.clone();
        Ok(())
    }

    async fn delete(&self, id: HeroId) -> Result<()> {
        let mut heroes = self.heroes.lock().await;
        let before = heroes.len();
        heroes.retain(|h| h.id != id);
        if heroes.len() == before {
            return Err(HeroError::NotFound { id });
        }
        Ok(())
    }
}
