//! Движок подсчёта очков для Tiến Lên Miền Nam (2–4 игрока).
//!
//! Что умеет:
//! - расчёт переводов очков по настраиваемым правилам
//!   (база, множители за tới trắng / 10+ карт / cháy);
//! - обратимая история раундов с откатом последнего;
//! - снапшот всей сессии в JSON и восстановление на старте.
//!
//! Слои:
//! - `domain` — очки, игроки, правила, результаты раундов;
//! - `engine` — расчёт, применение/откат, история, `GameSession`;
//! - `infra` — id игроков, снапшот, абстракция хранилища;
//! - `api` — команды/запросы/DTO для фронта.
//!
//! Рендеринг, сбор ввода и конкретный фронт – внешние коллаборанты,
//! сюда они не входят.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use crate::domain::{Player, PlayerId, Points, RoundNumber, RoundResult, RuleConfig};
pub use crate::engine::{EngineError, GameSession, RoundHistory, SessionPhase, MAX_PLAYERS};
pub use crate::infra::{
    load_session_or_default, persist_session, InMemoryScoreStorage, JsonFileStorage, ScoreStorage,
    SessionSnapshot, StorageError,
};
