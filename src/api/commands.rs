use serde::{Deserialize, Serialize};

use crate::api::dto::{round_to_dto, CommandResponse};
use crate::api::errors::ApiError;
use crate::api::queries::build_session_view;
use crate::domain::points::Points;
use crate::domain::rules::RuleConfig;
use crate::domain::PlayerId;
use crate::engine::session::GameSession;
use crate::infra::persistence::{persist_session, ScoreStorage};

/// Команда верхнего уровня – всё, что меняет состояние сессии.
///
/// Фронт шлёт ровно эти намерения; других путей мутации нет.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Добавить игрока.
    AddPlayer(AddPlayerCommand),

    /// Удалить игрока (с чисткой истории, если она непуста).
    RemovePlayer(RemovePlayerCommand),

    /// Посчитать и записать раунд.
    PlayRound(PlayRoundCommand),

    /// Откатить последний раунд.
    UndoLastRound,

    /// Полный сброс сессии.
    ResetGame,

    /// Ручная корректировка счёта (мимо истории).
    AdjustScore(AdjustScoreCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddPlayerCommand {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemovePlayerCommand {
    pub player_id: PlayerId,
}

/// Количество оставшихся карт одного проигравшего.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoserCardsEntry {
    pub player_id: PlayerId,
    /// "Сырое" значение из формы; движок прижмёт его к [1, 13].
    pub remaining_cards: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayRoundCommand {
    /// None – победитель не выбран (фронт мог прислать пустую форму).
    pub winner_id: Option<PlayerId>,
    pub loser_cards: Vec<LoserCardsEntry>,
    pub is_instant_win: bool,
    /// Правила читаются заново на каждый раунд – смена настроек
    /// действует только вперёд.
    pub rules: RuleConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdjustScoreCommand {
    pub player_id: PlayerId,
    /// Ненулевая дельта, может быть отрицательной.
    pub delta: i64,
}

/// Выполнить команду над сессией.
///
/// После каждой успешной мутации состояние сохраняется best-effort:
/// ошибка записи логируется и не откатывает мутацию.
pub fn apply_command(
    session: &mut GameSession,
    storage: &mut impl ScoreStorage,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let response = match command {
        Command::AddPlayer(cmd) => {
            let player_id = session.add_player(&cmd.name)?;
            CommandResponse::PlayerAdded {
                player_id,
                session: build_session_view(session),
            }
        }

        Command::RemovePlayer(cmd) => {
            session.remove_player(cmd.player_id)?;
            CommandResponse::SessionState(build_session_view(session))
        }

        Command::PlayRound(cmd) => {
            let cards: Vec<(PlayerId, i32)> = cmd
                .loser_cards
                .iter()
                .map(|e| (e.player_id, e.remaining_cards))
                .collect();

            let round =
                session.play_round(cmd.winner_id, &cards, cmd.is_instant_win, &cmd.rules)?;

            CommandResponse::RoundPlayed {
                round: round_to_dto(&round),
                session: build_session_view(session),
            }
        }

        Command::UndoLastRound => {
            let round = session.undo_last_round()?;
            CommandResponse::RoundUndone {
                round: round_to_dto(&round),
                session: build_session_view(session),
            }
        }

        Command::ResetGame => {
            session.reset();
            CommandResponse::SessionState(build_session_view(session))
        }

        Command::AdjustScore(cmd) => {
            session.manual_adjust(cmd.player_id, Points::new(cmd.delta))?;
            CommandResponse::SessionState(build_session_view(session))
        }
    };

    persist_session(storage, session);
    Ok(response)
}
