use serde::{Deserialize, Serialize};

use crate::domain::round::RoundResult;

/// История раундов в хронологическом порядке.
///
/// Только добавление в конец и снятие последнего элемента (для отката).
/// Переупорядочивания нет и не будет.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RoundHistory {
    rounds: Vec<RoundResult>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    pub fn from_rounds(rounds: Vec<RoundResult>) -> Self {
        Self { rounds }
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Записать раунд в конец журнала.
    pub fn record(&mut self, result: RoundResult) {
        self.rounds.push(result);
    }

    /// Последний сыгранный раунд, без снятия.
    pub fn peek_last(&self) -> Option<&RoundResult> {
        self.rounds.last()
    }

    /// Снять последний раунд (для отката). Максимум один за вызов.
    pub fn pop_last(&mut self) -> Option<RoundResult> {
        self.rounds.pop()
    }

    /// Очистить журнал целиком.
    pub fn clear(&mut self) {
        self.rounds.clear();
    }

    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }
}
