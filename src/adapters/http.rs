use crate::domain::model::{Hero, HeroId, NewHero};
use crate::domain::ports::{ConfigProvider, HeroTransport};
use crate::utils::error::{HeroError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

/// 以 reqwest 實作的 heroes REST 傳輸層
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    collection: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, heroes_path: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        // join 會把最後一段路徑換掉，先補上結尾的 '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let collection = base.join(heroes_path.trim_matches('/'))?;

        Ok(Self {
            client: Client::new(),
            collection,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url(), config.heroes_path())
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn item_url(&self, id: HeroId) -> Result<Url> {
        let url = format!("{}/{}", self.collection.as_str().trim_end_matches('/'), id);
        Ok(Url::parse(&url)?)
    }

    fn query_url(&self, key: &str, value: &str) -> Url {
        let mut url = self.collection.clone();
        url.query_pairs_mut().append_pair(key, value);
        url
    }

    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();

        tracing::debug!("API response status: {} ({})", status, url);

        if !status.is_success() {
            return Err(HeroError::Status {
                url,
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(response.text().await?)
    }

    async fn send_json<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R> {
        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl HeroTransport for ReqwestTransport {
    async fn fetch_all(&self) -> Result<Vec<Hero>> {
        tracing::debug!("GET {}", self.collection);
        self.send_json(self.client.get(self.collection.clone())).await
    }

    async fn fetch_matching(&self, term: &str) -> Result<Vec<Hero>> {
        let url = self.query_url("name", term);
        tracing::debug!("GET {}", url);
        self.send_json(self.client.get(url)).await
    }

    async fn fetch_by_query_id(&self, id: HeroId) -> Result<Vec<Hero>> {
        let url = self.query_url("id", &id.to_string());
        tracing::debug!("GET {}", url);
        self.send_json(self.client.get(url)).await
    }

    async fn fetch_one(&self, id: HeroId) -> Result<Hero> {
        let url = self.item_url(id)?;
        tracing::debug!("GET {}", url);
        self.send_json(self.client.get(url)).await
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero> {
        tracing::debug!("POST {}", self.collection);
        self.send_json(self.client.post(self.collection.clone()).json(hero))
            .await
    }

    // 更新走集合路徑，不是 /{id}
    async fn replace(&self, hero: &Hero) -> Result<()> {
        tracing::debug!("PUT {} (id={})", self.collection, hero.id);
        self.send(self.client.put(self.collection.clone()).json(hero))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: HeroId) -> Result<()> {
        let url = self.item_url(id)?;
        tracing::debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url_joins_base_and_path() {
        let transport = ReqwestTransport::new("http://localhost:3000", "api/heroes").unwrap();
        assert_eq!(
            transport.collection_url().as_str(),
            "http://localhost:3000/api/heroes"
        );

        let nested = ReqwestTransport::new("http://localhost:3000/v1", "/heroes/").unwrap();
        assert_eq!(
            nested.collection_url().as_str(),
            "http://localhost:3000/v1/heroes"
        );
    }

    #[test]
    fn test_item_and_query_urls() {
        let transport = ReqwestTransport::new("http://localhost:3000", "api/heroes").unwrap();

        assert_eq!(
            transport.item_url(11).unwrap().as_str(),
            "http://localhost:3000/api/heroes/11"
        );
        assert_eq!(
            transport.query_url("name", "dr iq").as_str(),
            "http://localhost:3000/api/heroes?name=dr+iq"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ReqwestTransport::new("not a url", "api/heroes"),
            Err(HeroError::Url(_))
        ));
    }
}
