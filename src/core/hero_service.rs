use crate::core::messages::MessageService;
use crate::core::recovery::recover;
use crate::domain::model::{Hero, HeroId, HeroRef, NewHero};
use crate::domain::ports::{DiagnosticSink, HeroTransport};
use crate::utils::error::Result;

/// heroes 集合的資料存取。
///
/// 每個會發出請求的操作失敗時都不會回傳錯誤：錯誤交給 diagnostic sink，
/// 訊息紀錄加上 `"<operation> failed: <message>"`，結果改用該操作的預設值
/// （空集合或 `None`）。
pub struct HeroService<T: HeroTransport, D: DiagnosticSink> {
    transport: T,
    sink: D,
    messages: MessageService,
}

impl<T: HeroTransport, D: DiagnosticSink> HeroService<T, D> {
    pub fn new(transport: T, sink: D, messages: MessageService) -> Self {
        Self {
            transport,
            sink,
            messages,
        }
    }

    pub fn messages(&self) -> &MessageService {
        &self.messages
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_all(&self) -> Vec<Hero> {
        let outcome = self
            .transport
            .fetch_all()
            .await
            .inspect(|_| self.log("fetched heroes"));
        self.recover("getHeroes", Vec::new(), outcome)
    }

    pub async fn get_by_id(&self, id: HeroId) -> Option<Hero> {
        let outcome = self
            .transport
            .fetch_one(id)
            .await
            .inspect(|_| self.log(format!("fetched hero id={}", id)))
            .map(Some);
        self.recover(&format!("getHero id={}", id), None, outcome)
    }

    /// 用 `?id=` 查詢取代 `/{id}`，找不到時回傳 `None` 而不是 404
    pub async fn get_no_404(&self, id: HeroId) -> Option<Hero> {
        let outcome = self
            .transport
            .fetch_by_query_id(id)
            .await
            .map(|heroes| heroes.into_iter().next())
            .inspect(|hero| {
                let found = if hero.is_some() {
                    "fetched"
                } else {
                    "did not find"
                };
                self.log(format!("{} hero id={}", found, id));
            });
        self.recover(&format!("getHeroNo404 id={}", id), None, outcome)
    }

    pub async fn create(&self, hero: NewHero) -> Option<Hero> {
        let outcome = self
            .transport
            .create(&hero)
            .await
            .inspect(|created| self.log(format!("added hero w/ id={}", created.id)))
            .map(Some);
        self.recover("addHero", None, outcome)
    }

    pub async fn update(&self, hero: &Hero) -> Option<()> {
        let outcome = self
            .transport
            .replace(hero)
            .await
            .inspect(|_| self.log(format!("updated hero id={}", hero.id)))
            .map(Some);
        self.recover("updateHero", None, outcome)
    }

    pub async fn remove(&self, target: impl Into<HeroRef>) -> Option<()> {
        let id = target.into().id();
        let outcome = self
            .transport
            .delete(id)
            .await
            .inspect(|_| self.log(format!("deleted hero id={}", id)))
            .map(Some);
        self.recover("deleteHero", None, outcome)
    }

    /// 空白或只有空白字元的關鍵字直接回傳空集合，不發請求也不留訊息
    pub async fn search(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let outcome = self
            .transport
            .fetch_matching(term)
            .await
            .inspect(|_| self.log(format!("found heroes matching \"{}\"", term)));
        self.recover("searchHeroes", Vec::new(), outcome)
    }

    fn log(&self, message: impl Into<String>) {
        self.messages.add(message);
    }

    fn recover<R>(&self, operation: &str, fallback: R, outcome: Result<R>) -> R {
        recover(operation, fallback, outcome, &self.messages, &self.sink)
    }
}
