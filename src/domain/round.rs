use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::{PlayerId, RoundNumber};

/// Строка результата раунда для одного игрока.
///
/// Имя – снапшот на момент раунда, не живая ссылка:
/// история должна читаться даже после изменений состава.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    /// 0 у победителя, 1–13 у проигравших.
    pub remaining_cards: u8,
    /// Положительное у победителя, отрицательное (или ноль) у проигравших.
    pub points_change: Points,
    /// Человекочитаемое объяснение правила. Только для отображения,
    /// при пересчётах не используется.
    pub reason: String,
}

/// Итог одного раунда: кто выиграл и кто сколько потерял.
///
/// Неизменяем после записи в историю. Первая строка `player_results` –
/// всегда победитель.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round_number: RoundNumber,
    pub winner_id: PlayerId,
    pub winner_name: String,
    pub is_instant_win: bool,
    pub player_results: Vec<PlayerRoundEntry>,
}

impl RoundResult {
    /// Строка победителя (по соглашению – первая).
    pub fn winner_entry(&self) -> Option<&PlayerRoundEntry> {
        self.player_results.first()
    }

    /// Сумма всех изменений очков. Для корректного результата – всегда 0.
    pub fn total_points_change(&self) -> Points {
        self.player_results
            .iter()
            .fold(Points::ZERO, |acc, e| acc + e.points_change)
    }
}
