use serde::{Deserialize, Serialize};

use crate::api::dto::{player_to_dto, round_to_dto, PlayerDto, RoundResultDto, SessionViewDto};
use crate::engine::session::GameSession;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Полное представление сессии.
    GetSession,

    /// Только список игроков.
    GetPlayers,

    /// Только история раундов.
    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Session(SessionViewDto),
    Players(Vec<PlayerDto>),
    History(Vec<RoundResultDto>),
}

pub fn run_query(session: &GameSession, query: Query) -> QueryResponse {
    match query {
        Query::GetSession => QueryResponse::Session(build_session_view(session)),
        Query::GetPlayers => QueryResponse::Players(build_players(session)),
        Query::GetHistory => QueryResponse::History(build_history(session)),
    }
}

/// Сформировать полное DTO сессии.
pub fn build_session_view(session: &GameSession) -> SessionViewDto {
    SessionViewDto {
        phase: session.phase(),
        players: build_players(session),
        round_number: session.round_number(),
        history: build_history(session),
        can_undo: !session.history().is_empty(),
    }
}

fn build_players(session: &GameSession) -> Vec<PlayerDto> {
    session.players().iter().map(player_to_dto).collect()
}

/// История в порядке отображения: от нового раунда к старому.
fn build_history(session: &GameSession) -> Vec<RoundResultDto> {
    session
        .history()
        .rounds()
        .iter()
        .rev()
        .map(round_to_dto)
        .collect()
}
