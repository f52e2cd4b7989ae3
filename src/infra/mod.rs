//! Инфраструктурный слой вокруг движка:
//! - выдача id игроков;
//! - снапшот и абстракция хранения (файл / память / тесты).

pub mod ids;
pub mod persistence;

pub use ids::PlayerIdAllocator;
pub use persistence::{
    load_session_or_default, persist_session, InMemoryScoreStorage, JsonFileStorage, ScoreStorage,
    SessionSnapshot, StorageError,
};
