//! Доменная модель счётчика очков: очки, игроки, правила, результаты раундов.

pub mod player;
pub mod points;
pub mod round;
pub mod rules;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type RoundNumber = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Player и т.п.
pub use player::*;
pub use points::*;
pub use round::*;
pub use rules::*;
