use std::future::Future;

use anyhow::Result;
use reqwest::Client;

use crate::messages::MessageLog;
use crate::models::{Hero, HeroId, NewHero};

/// Data access gateway for the hero web api.
///
/// Every operation resolves successfully: failures are absorbed here,
/// logged, and replaced by the operation's fallback value, so callers
/// never need failure-handling branches.
#[derive(Clone)]
pub struct HeroService {
    client: Client,
    base_url: String,
    messages: MessageLog,
}

impl HeroService {
    pub fn new(base_url: impl Into<String>, messages: MessageLog) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            messages,
        }
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// GET all heroes. Falls back to an empty list.
    pub async fn get_heroes(&self) -> Vec<Hero> {
        self.or_fallback("get_heroes", Vec::new(), async {
            let heroes: Vec<Hero> = self
                .client
                .get(&self.base_url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            self.log("fetched heroes");
            Ok(heroes)
        })
        .await
    }

    /// GET a single hero by id. Falls back to `None`.
    pub async fn get_hero(&self, hero: impl Into<HeroId>) -> Option<Hero> {
        let id = hero.into();
        let url = format!("{}/{}", self.base_url, id);
        self.or_fallback(&format!("get_hero id={id}"), None, async {
            let hero: Hero = self
                .client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            self.log(format!("fetched hero id={id}"));
            Ok(Some(hero))
        })
        .await
    }

    /// POST a new hero; the backend assigns the id and returns the full
    /// record. `None` means "not added".
    pub async fn add_hero(&self, name: impl Into<String>) -> Option<Hero> {
        let candidate = NewHero { name: name.into() };
        self.or_fallback("add_hero", None, async {
            let hero: Hero = self
                .client
                .post(&self.base_url)
                .json(&candidate)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            self.log(format!("added hero id={}", hero.id));
            Ok(Some(hero))
        })
        .await
    }

    /// DELETE by id or by record. Falls back to `None`.
    pub async fn delete_hero(&self, hero: impl Into<HeroId>) -> Option<Hero> {
        let id = hero.into();
        let url = format!("{}/{}", self.base_url, id);
        self.or_fallback(&format!("delete_hero id={id}"), None, async {
            let hero: Hero = self
                .client
                .delete(&url)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            self.log(format!("deleted hero id={id}"));
            Ok(Some(hero))
        })
        .await
    }

    /// PUT a full-record replace. Best-effort ack; `None` on failure.
    pub async fn update_hero(&self, hero: &Hero) -> Option<Hero> {
        self.or_fallback(&format!("update_hero id={}", hero.id), None, async {
            let updated: Hero = self
                .client
                .put(&self.base_url)
                .json(hero)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            self.log(format!("updated hero id={}", hero.id));
            Ok(Some(updated))
        })
        .await
    }

    /// GET heroes whose name matches the term. A blank term short-circuits
    /// to an empty list without touching the network.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let url = format!("{}/", self.base_url);
        self.or_fallback("search_heroes", Vec::new(), async {
            let heroes: Vec<Hero> = self
                .client
                .get(&url)
                .query(&[("name", term)])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            self.log(format!("found {} heroes matching \"{term}\"", heroes.len()));
            Ok(heroes)
        })
        .await
    }

    /// The uniform recovery policy: run the operation, and on any failure
    /// (transport, non-2xx, malformed payload alike) write a diagnostic,
    /// append a log entry tagged with the operation name, and substitute
    /// the fallback so the caller always gets a value.
    async fn or_fallback<T>(
        &self,
        operation: &str,
        fallback: T,
        op: impl Future<Output = Result<T>>,
    ) -> T {
        match op.await {
            Ok(value) => value,
            Err(err) => {
                tracing::error!("{operation} failed: {err:#}");
                self.messages
                    .add(format!("HeroService: {operation} failed: {err}"));
                fallback
            }
        }
    }

    fn log(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.messages.add(format!("HeroService: {message}"));
    }
}
