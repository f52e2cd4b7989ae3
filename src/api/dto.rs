use serde::{Deserialize, Serialize};

use crate::domain::round::{PlayerRoundEntry, RoundResult};
use crate::domain::{Player, PlayerId, RoundNumber};
use crate::engine::session::SessionPhase;

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub player_id: PlayerId,
    pub name: String,
    pub score: i64,
    /// Счёт со знаком, как рисует фронт: "+57", "-52", "0".
    pub score_display: String,
}

/// DTO строки результата раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoundEntryDto {
    pub player_id: PlayerId,
    pub player_name: String,
    pub remaining_cards: u8,
    pub points_change: i64,
    pub reason: String,
}

/// DTO одного раунда для истории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoundResultDto {
    pub round_number: RoundNumber,
    pub winner_id: PlayerId,
    pub winner_name: String,
    pub is_instant_win: bool,
    pub results: Vec<PlayerRoundEntryDto>,
}

/// Полное представление сессии для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionViewDto {
    pub phase: SessionPhase,
    pub players: Vec<PlayerDto>,
    pub round_number: RoundNumber,
    /// Раунды от нового к старому – в порядке отображения.
    pub history: Vec<RoundResultDto>,
    pub can_undo: bool,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Обновлённое состояние сессии.
    SessionState(SessionViewDto),

    /// Игрок добавлен.
    PlayerAdded {
        player_id: PlayerId,
        session: SessionViewDto,
    },

    /// Раунд посчитан и записан.
    RoundPlayed {
        round: RoundResultDto,
        session: SessionViewDto,
    },

    /// Последний раунд откачен.
    RoundUndone {
        round: RoundResultDto,
        session: SessionViewDto,
    },
}

pub fn player_to_dto(player: &Player) -> PlayerDto {
    PlayerDto {
        player_id: player.id,
        name: player.name.clone(),
        score: player.score.0,
        score_display: player.score.to_string(),
    }
}

pub fn round_to_dto(round: &RoundResult) -> RoundResultDto {
    RoundResultDto {
        round_number: round.round_number,
        winner_id: round.winner_id,
        winner_name: round.winner_name.clone(),
        is_instant_win: round.is_instant_win,
        results: round.player_results.iter().map(entry_to_dto).collect(),
    }
}

fn entry_to_dto(entry: &PlayerRoundEntry) -> PlayerRoundEntryDto {
    PlayerRoundEntryDto {
        player_id: entry.player_id,
        player_name: entry.player_name.clone(),
        remaining_cards: entry.remaining_cards,
        points_change: entry.points_change.0,
        reason: entry.reason.clone(),
    }
}
