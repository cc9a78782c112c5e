pub mod hero;

pub use hero::{Hero, HeroId, NewHero};
