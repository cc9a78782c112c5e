use crate::models::Hero;
use crate::service::HeroService;

/// The list view's state container: owns the displayed collection and is
/// passed by reference to whatever renders it. The collection only changes
/// on `load` completion or a local add/delete; it is dropped with the view.
pub struct HeroesView {
    service: HeroService,
    heroes: Vec<Hero>,
}

impl HeroesView {
    pub fn new(service: HeroService) -> Self {
        Self {
            service,
            heroes: Vec::new(),
        }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn service(&self) -> &HeroService {
        &self.service
    }

    /// Fetch the full collection and replace the held list wholesale with
    /// whatever arrives. A fallback empty list from a failed fetch is
    /// indistinguishable from a genuinely empty backend.
    pub async fn load(&mut self) {
        self.heroes = self.service.get_heroes().await;
    }

    /// Trims the name; blank input is a no-op. When the backend declines
    /// (gateway fallback), nothing visibly changes.
    pub async fn add(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(hero) = self.service.add_hero(name).await {
            self.heroes.push(hero);
        }
    }

    /// Optimistic delete: the record leaves the held list before the
    /// backend confirms, and the delete request is fired without awaiting
    /// its result. A failed delete leaves the view stale until the next
    /// `load`. Must run inside a tokio runtime.
    pub fn delete(&mut self, hero: &Hero) {
        if let Some(pos) = self.heroes.iter().position(|h| h.id == hero.id) {
            self.heroes.remove(pos);
        }
        let service = self.service.clone();
        let id = hero.id;
        tokio::spawn(async move {
            service.delete_hero(id).await;
        });
    }
}
