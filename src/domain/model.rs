use serde::{Deserialize, Serialize};

pub type HeroId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// 建立時送出的內容，id 由伺服器指派
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// 刪除時可以只給 id，也可以給整個 Hero
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroRef {
    ById(HeroId),
    ByEntity(Hero),
}

impl HeroRef {
    pub fn id(&self) -> HeroId {
        match self {
            HeroRef::ById(id) => *id,
            HeroRef::ByEntity(hero) => hero.id,
        }
    }
}

impl From<HeroId> for HeroRef {
    fn from(id: HeroId) -> Self {
        HeroRef::ById(id)
    }
}

impl From<Hero> for HeroRef {
    fn from(hero: Hero) -> Self {
        HeroRef::ByEntity(hero)
    }
}

impl From<&Hero> for HeroRef {
    fn from(hero: &Hero) -> Self {
        HeroRef::ByEntity(hero.clone())
    }
}
