use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::PlayerId;

/// Игрок за столом: id, имя и текущий счёт.
///
/// Счёт меняется только через engine (применение/откат раунда)
/// либо через ручную корректировку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: Points,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: Points::ZERO,
        }
    }

    /// Сравнение имён без учёта регистра – дубликаты ловим именно так.
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other.trim())
    }
}
