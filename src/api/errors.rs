use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные.
    BadRequest(String),

    /// Игрок не найден.
    PlayerNotFound(PlayerId),

    /// Ошибка движка (правила состава, раунда, отката).
    Engine(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::PlayerNotFound(id) => ApiError::PlayerNotFound(id),
            other => ApiError::Engine(other.to_string()),
        }
    }
}
