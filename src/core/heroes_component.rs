use crate::core::hero_service::HeroService;
use crate::domain::model::{Hero, HeroId, NewHero};
use crate::domain::ports::{DiagnosticSink, HeroTransport};

/// 英雄列表的 view model：持有目前的列表與選取的英雄，畫面由呼叫端負責。
pub struct HeroesComponent<'a, T: HeroTransport, D: DiagnosticSink> {
    service: &'a HeroService<T, D>,
    heroes: Vec<Hero>,
    selected: Option<Hero>,
}

impl<'a, T: HeroTransport, D: DiagnosticSink> HeroesComponent<'a, T, D> {
    pub fn new(service: &'a HeroService<T, D>) -> Self {
        Self {
            service,
            heroes: Vec::new(),
            selected: None,
        }
    }

    pub async fn init(&mut self) {
        self.heroes = self.service.list_all().await;
    }

    pub fn select(&mut self, hero: Hero) {
        self.selected = Some(hero);
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn selected(&self) -> Option<&Hero> {
        self.selected.as_ref()
    }

    /// 名稱去頭尾空白後為空就忽略
    pub async fn add(&mut self, name: &str) -> Option<&Hero> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let created = self.service.create(NewHero::new(name)).await?;
        self.heroes.push(created);
        self.heroes.last()
    }

    /// 整筆更新名稱；空白名稱同樣忽略，不送出 PUT
    pub async fn rename(&mut self, id: HeroId, name: &str) -> Option<Hero> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let hero = Hero::new(id, name);
        self.service.update(&hero).await?;
        if let Some(existing) = self.heroes.iter_mut().find(|h| h.id == id) {
            existing.name = hero.name.clone();
        }
        Some(hero)
    }

    /// 先從本地列表移除，再通知後端
    pub async fn delete(&mut self, hero: &Hero) {
        self.heroes.retain(|h| h.id != hero.id);
        if self.selected.as_ref().is_some_and(|s| s.id == hero.id) {
            self.selected = None;
        }
        self.service.remove(hero).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTransport;
    use crate::core::messages::MessageService;
    use crate::utils::error::HeroError;

    struct SilentSink;

    impl DiagnosticSink for SilentSink {
        fn report(&self, _operation: &str, _error: &HeroError) {}
    }

    fn service() -> HeroService<InMemoryTransport, SilentSink> {
        HeroService::new(InMemoryTransport::seeded(), SilentSink, MessageService::new())
    }

    #[tokio::test]
    async fn test_init_fetches_heroes() {
        let service = service();
        let mut component = HeroesComponent::new(&service);
        assert!(component.heroes().is_empty());

        component.init().await;

        assert_eq!(component.heroes().len(), 10);
        assert_eq!(component.heroes()[0], Hero::new(11, "Dr Nice"));
        assert_eq!(service.messages().messages(), vec!["fetched heroes"]);
    }

    #[tokio::test]
    async fn test_select_records_selection() {
        let service = service();
        let mut component = HeroesComponent::new(&service);
        component.init().await;

        let hero = component.heroes()[2].clone();
        component.select(hero.clone());

        assert_eq!(component.selected(), Some(&hero));
        assert_eq!(service.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_add_appends_created_hero() {
        let service = service();
        let mut component = HeroesComponent::new(&service);
        component.init().await;

        let added = component.add("  Windstorm ").await.cloned();

        assert_eq!(added, Some(Hero::new(21, "Windstorm")));
        assert_eq!(component.heroes().len(), 11);
        assert_eq!(
            service.messages().messages().last().unwrap(),
            "added hero w/ id=21"
        );
    }

    #[tokio::test]
    async fn test_add_ignores_blank_name() {
        let service = service();
        let mut component = HeroesComponent::new(&service);

        assert!(component.add("   ").await.is_none());
        assert!(service.messages().is_empty());
    }

    #[tokio::test]
    async fn test_rename_updates_backend_and_local_list() {
        let service = service();
        let mut component = HeroesComponent::new(&service);
        component.init().await;

        let renamed = component.rename(12, " Narco II ").await;

        assert_eq!(renamed, Some(Hero::new(12, "Narco II")));
        assert_eq!(component.heroes()[1], Hero::new(12, "Narco II"));
        assert_eq!(
            service.get_by_id(12).await,
            Some(Hero::new(12, "Narco II"))
        );
        assert_eq!(
            service.messages().messages(),
            vec!["fetched heroes", "updated hero id=12", "fetched hero id=12"]
        );
    }

    #[tokio::test]
    async fn test_rename_ignores_blank_name() {
        let service = service();
        let mut component = HeroesComponent::new(&service);

        assert!(component.rename(12, "  \t ").await.is_none());
        assert!(service.messages().is_empty());
        assert_eq!(service.get_by_id(12).await, Some(Hero::new(12, "Narco")));
    }

    #[tokio::test]
    async fn test_delete_removes_locally_and_clears_selection() {
        let service = service();
        let mut component = HeroesComponent::new(&service);
        component.init().await;

        let hero = component.heroes()[0].clone();
        component.select(hero.clone());
        component.delete(&hero).await;

        assert_eq!(component.heroes().len(), 9);
        assert!(component.selected().is_none());
        assert_eq!(
            service.messages().messages().last().unwrap(),
            "deleted hero id=11"
        );
        assert_eq!(service.list_all().await.len(), 9);
    }
}
