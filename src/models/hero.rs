use serde::{Deserialize, Serialize};

/// The one domain entity. `id` is assigned by the backend and never
/// changes afterwards; `name` is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

/// Creation payload. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

/// Delete and get-by-id accept either a raw id or a full record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroId(pub u64);

impl From<u64> for HeroId {
    fn from(id: u64) -> Self {
        HeroId(id)
    }
}

impl From<&Hero> for HeroId {
    fn from(hero: &Hero) -> Self {
        HeroId(hero.id)
    }
}

impl From<Hero> for HeroId {
    fn from(hero: Hero) -> Self {
        HeroId(hero.id)
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
