//! Движок подсчёта очков: расчёт раунда, применение/откат, история, сессия.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `add_player` / `remove_player` – управление составом
//!   - `play_round` – посчитать и записать раунд
//!   - `undo_last_round` – откатить последний раунд
//!   - `manual_adjust` – ручная корректировка мимо истории
//!   - `reset` – полный сброс

pub mod calculator;
pub mod errors;
pub mod history;
pub mod ledger;
pub mod session;

pub use calculator::compute_round;
pub use errors::EngineError;
pub use history::RoundHistory;
pub use ledger::{apply_round, reverse_round};
pub use session::{GameSession, SessionPhase, MAX_PLAYERS};
