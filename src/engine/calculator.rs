//! Чистый расчёт раунда: из состава, победителя и правил – в `RoundResult`.
//!
//! Никаких побочных эффектов: игроки не мутируются, история не трогается.
//! Номер раунда здесь всегда 0 – его проставляет `GameSession` при записи.

use crate::domain::points::Points;
use crate::domain::round::{PlayerRoundEntry, RoundResult};
use crate::domain::rules::{clamp_remaining_cards, RuleConfig, FULL_HAND_CARDS, TEN_CARDS_THRESHOLD};
use crate::domain::Player;

/// Посчитать раунд.
///
/// `losers` – проигравшие в нужном порядке вместе с "сырым" количеством
/// оставшихся карт; значения вне [1, 13] прижимаются к границе, а не
/// отклоняются. Очки каждого проигравшего зависят только от его карт
/// и общих флагов/правил, не от других проигравших.
pub fn compute_round(
    winner: &Player,
    losers: &[(&Player, i32)],
    is_instant_win: bool,
    config: &RuleConfig,
) -> RoundResult {
    let config = config.sanitized();

    let mut entries = Vec::with_capacity(losers.len() + 1);
    let mut total_winner_points = Points::ZERO;

    for (loser, raw_cards) in losers {
        let remaining = clamp_remaining_cards(*raw_cards);
        let (points, reason) = loser_points(remaining, is_instant_win, &config);

        total_winner_points += points;
        entries.push(PlayerRoundEntry {
            player_id: loser.id,
            player_name: loser.name.clone(),
            remaining_cards: remaining,
            points_change: -points,
            reason,
        });
    }

    // Победитель забирает сумму потерь; его строка идёт первой.
    entries.insert(
        0,
        PlayerRoundEntry {
            player_id: winner.id,
            player_name: winner.name.clone(),
            remaining_cards: 0,
            points_change: total_winner_points,
            reason: "win".to_string(),
        },
    );

    RoundResult {
        round_number: 0,
        winner_id: winner.id,
        winner_name: winner.name.clone(),
        is_instant_win,
        player_results: entries,
    }
}

/// Очки и объяснение для одного проигравшего.
fn loser_points(remaining: u8, is_instant_win: bool, config: &RuleConfig) -> (Points, String) {
    let mut points = i64::from(remaining).saturating_mul(i64::from(config.base_points));
    let mut reason = String::new();

    if remaining == FULL_HAND_CARDS {
        points = points.saturating_mul(i64::from(config.full_cards_multiplier));
        reason = "full hand (13 cards)".to_string();
    } else if remaining >= TEN_CARDS_THRESHOLD {
        points = points.saturating_mul(i64::from(config.ten_cards_multiplier));
        reason = format!("{} cards (≥10)", remaining);
    }

    if is_instant_win {
        points = points.saturating_mul(i64::from(config.instant_win_multiplier));
        reason = if reason.is_empty() {
            "instant win".to_string()
        } else {
            format!("{} + instant win", reason)
        };
    }

    // Фолбэк проставляется после шага instant win: у проигравшего
    // с <10 картами в "tới trắng"-раунде причина – просто "instant win".
    if reason.is_empty() {
        reason = format!("{} cards remaining", remaining);
    }

    (Points::new(points), reason)
}
