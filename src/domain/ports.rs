use crate::domain::model::{Hero, HeroId, NewHero};
use crate::utils::error::{HeroError, Result};
use async_trait::async_trait;

/// heroes 集合資源的傳輸層
#[async_trait]
pub trait HeroTransport: Send + Sync {
    /// `GET collection`
    async fn fetch_all(&self) -> Result<Vec<Hero>>;

    /// `GET collection?name=<term>`
    async fn fetch_matching(&self, term: &str) -> Result<Vec<Hero>>;

    /// `GET collection?id=<id>`
    async fn fetch_by_query_id(&self, id: HeroId) -> Result<Vec<Hero>>;

    /// `GET collection/{id}`
    async fn fetch_one(&self, id: HeroId) -> Result<Hero>;

    /// `POST collection`
    async fn create(&self, hero: &NewHero) -> Result<Hero>;

    /// `PUT collection`，整筆取代
    async fn replace(&self, hero: &Hero) -> Result<()>;

    /// `DELETE collection/{id}`
    async fn delete(&self, id: HeroId) -> Result<()>;
}

/// 錯誤的原始內容送往這裡（給維運看，不給使用者看）
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, operation: &str, error: &HeroError);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn heroes_path(&self) -> &str;
}
