use crate::domain::PlayerId;

use thiserror::Error;

/// Ошибки движка подсчёта очков.
///
/// Все они восстановимые: поднимаются до вызывающего (UI),
/// показываются человеку и ничего не ломают в состоянии сессии.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Имя игрока пустое")]
    InvalidName,

    #[error("Игрок с именем \"{0}\" уже есть")]
    DuplicateName(String),

    #[error("За столом уже максимум игроков ({0})")]
    RosterFull(usize),

    #[error("Игрок {0} не найден")]
    PlayerNotFound(PlayerId),

    #[error("Победитель не выбран")]
    NoWinnerSelected,

    #[error("Недостаточно игроков для раунда (нужно минимум 2)")]
    NotEnoughPlayers,

    #[error("Ключ {0} в списке карт не соответствует проигравшему")]
    UnknownLoser(PlayerId),

    #[error("Для игрока {0} не указано количество оставшихся карт")]
    MissingCardCount(PlayerId),

    #[error("Нечего откатывать – история пуста")]
    NothingToUndo,

    #[error("Корректировка на ноль очков не имеет смысла")]
    ZeroAdjustment,
}
