//! Применение и откат результатов раунда к списку игроков.
//!
//! Единственные пути мутации счёта, кроме явной ручной корректировки
//! в `GameSession`.

use crate::domain::round::RoundResult;
use crate::domain::Player;

/// Применить результат раунда: каждому игроку прибавляется его
/// `points_change`.
///
/// Строки, чей игрок уже удалён, молча пропускаются – это
/// задокументированный no-op, не ошибка.
pub fn apply_round(players: &mut [Player], result: &RoundResult) {
    for entry in &result.player_results {
        if let Some(player) = players.iter_mut().find(|p| p.id == entry.player_id) {
            player.score += entry.points_change;
        }
    }
}

/// Откатить результат раунда: точная аддитивная инверсия `apply_round`.
pub fn reverse_round(players: &mut [Player], result: &RoundResult) {
    for entry in &result.player_results {
        if let Some(player) = players.iter_mut().find(|p| p.id == entry.player_id) {
            player.score -= entry.points_change;
        }
    }
}
