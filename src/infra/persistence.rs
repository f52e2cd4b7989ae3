//! Снапшот сессии и абстракция хранилища.
//!
//! Хранилище – снапшот "на следующий раз", не источник истины:
//! источником истины для текущей сессии всегда остаётся память.
//! Поэтому ошибка записи логируется и не откатывает мутацию,
//! а ошибка чтения даёт каноничную пустую сессию.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::round::RoundResult;
use crate::domain::{Player, PlayerId, RoundNumber};
use crate::engine::history::RoundHistory;
use crate::engine::session::GameSession;
use crate::infra::ids::PlayerIdAllocator;

fn default_next_player_id() -> PlayerId {
    1
}

/// Сериализуемый снимок всей сессии.
///
/// Имена полей – camelCase: легаси-снапшоты должны читаться
/// без миграций.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub history: Vec<RoundResult>,
    #[serde(default)]
    pub round_number: RoundNumber,
    /// В легаси-записях поля может не быть – дефолт 1, дальше счётчик
    /// всё равно чинится по максимальному виденному id.
    #[serde(default = "default_next_player_id")]
    pub next_player_id: PlayerId,
}

impl SessionSnapshot {
    /// Снимок каноничной пустой сессии.
    pub fn empty() -> Self {
        Self {
            players: Vec::new(),
            history: Vec::new(),
            round_number: 0,
            next_player_id: 1,
        }
    }

    pub fn from_session(session: &GameSession) -> Self {
        Self {
            players: session.players().to_vec(),
            history: session.history().rounds().to_vec(),
            round_number: session.round_number(),
            next_player_id: session.next_player_id(),
        }
    }

    /// Восстановить сессию, починив инварианты записи:
    /// - счётчик id поднимается выше любого id из состава и истории;
    /// - счётчик раундов пересчитывается из длины истории.
    pub fn into_session(self) -> GameSession {
        let mut ids = PlayerIdAllocator::from_next(self.next_player_id);
        if let Some(max_seen) = self.max_seen_player_id() {
            ids.ensure_above(max_seen);
        }

        let round_number = self.history.len() as RoundNumber;
        let history = RoundHistory::from_rounds(self.history);

        GameSession::from_parts(self.players, history, round_number, ids)
    }

    /// Максимальный id, встречающийся в составе или в истории.
    fn max_seen_player_id(&self) -> Option<PlayerId> {
        let roster = self.players.iter().map(|p| p.id);
        let historic = self.history.iter().flat_map(|r| {
            std::iter::once(r.winner_id).chain(r.player_results.iter().map(|e| e.player_id))
        });
        roster.chain(historic).max()
    }
}

/// Ошибки хранилища. Наружу из мутаций сессии не пробрасываются.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Не удалось прочитать снапшот: {0}")]
    Read(String),

    #[error("Снапшот повреждён: {0}")]
    Corrupt(String),

    #[error("Не удалось записать снапшот: {0}")]
    Write(String),
}

/// Абстракция хранения снапшота.
///
/// Реализации: `InMemoryScoreStorage` для тестов и демо,
/// `JsonFileStorage` – один JSON-файл на диске.
pub trait ScoreStorage {
    /// Загрузить снапшот, если он есть.
    fn load(&self) -> Result<Option<SessionSnapshot>, StorageError>;

    /// Сохранить снапшот.
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StorageError>;
}

/// Простая in-memory реализация.
#[derive(Debug, Default)]
pub struct InMemoryScoreStorage {
    snapshot: Option<SessionSnapshot>,
}

impl InMemoryScoreStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStorage for InMemoryScoreStorage {
    fn load(&self) -> Result<Option<SessionSnapshot>, StorageError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }
}

/// Хранилище в одном JSON-файле.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<SessionSnapshot>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // Отсутствие файла – не ошибка: снапшота просто ещё нет.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Read(e.to_string())),
        };

        let snapshot =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StorageError::Write(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| StorageError::Write(e.to_string()))
    }
}

/// Загрузить сессию; любая проблема с чтением даёт пустую сессию.
pub fn load_session_or_default(storage: &impl ScoreStorage) -> GameSession {
    match storage.load() {
        Ok(Some(snapshot)) => snapshot.into_session(),
        Ok(None) => GameSession::new(),
        Err(err) => {
            tracing::warn!(%err, "снапшот не загрузился, стартуем с пустой сессии");
            GameSession::new()
        }
    }
}

/// Сохранить сессию best-effort: ошибка записи только логируется.
pub fn persist_session(storage: &mut impl ScoreStorage, session: &GameSession) {
    let snapshot = SessionSnapshot::from_session(session);
    if let Err(err) = storage.save(&snapshot) {
        tracing::warn!(%err, "снапшот не сохранился, состояние в памяти актуально");
    }
}
