//! `GameSession` – агрегат всей сессии: состав, счёт, история, счётчики.
//!
//! Все мутации идут через методы сессии; глобального состояния нет.
//! Персистентность сюда не зашита – см. `infra::persistence`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::round::RoundResult;
use crate::domain::rules::RuleConfig;
use crate::domain::{Player, PlayerId, RoundNumber};
use crate::engine::calculator::compute_round;
use crate::engine::errors::EngineError;
use crate::engine::history::RoundHistory;
use crate::engine::ledger;
use crate::infra::ids::PlayerIdAllocator;

/// Максимум игроков за столом.
pub const MAX_PLAYERS: usize = 4;

/// Фаза сессии – производная от количества игроков.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionPhase {
    /// Игроков нет.
    Empty,
    /// Один игрок: добавлять/удалять можно, играть – нет.
    Ready,
    /// Два и больше: можно считать раунды.
    Playable,
}

/// Сессия игры: единственный владелец игроков и истории.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    players: Vec<Player>,
    history: RoundHistory,
    round_number: RoundNumber,
    ids: PlayerIdAllocator,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Каноничная пустая сессия.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            history: RoundHistory::new(),
            round_number: 0,
            ids: PlayerIdAllocator::new(),
        }
    }

    /// Собрать сессию из готовых частей (восстановление из снапшота).
    ///
    /// Инварианты здесь НЕ чинятся – этим занимается
    /// `SessionSnapshot::into_session`.
    pub fn from_parts(
        players: Vec<Player>,
        history: RoundHistory,
        round_number: RoundNumber,
        ids: PlayerIdAllocator,
    ) -> Self {
        Self {
            players,
            history,
            round_number,
            ids,
        }
    }

    // ---------- чтение ----------

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn round_number(&self) -> RoundNumber {
        self.round_number
    }

    pub fn next_player_id(&self) -> PlayerId {
        self.ids.peek_next()
    }

    pub fn phase(&self) -> SessionPhase {
        match self.players.len() {
            0 => SessionPhase::Empty,
            1 => SessionPhase::Ready,
            _ => SessionPhase::Playable,
        }
    }

    // ---------- мутации ----------

    /// Добавить игрока. Id выдаётся монотонно и никогда не переиспользуется.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, EngineError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidName);
        }
        if self.players.iter().any(|p| p.name_matches(name)) {
            return Err(EngineError::DuplicateName(name.to_string()));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(EngineError::RosterFull(MAX_PLAYERS));
        }

        let id = self.ids.next_id();
        self.players.push(Player::new(id, name));
        Ok(id)
    }

    /// Удалить игрока.
    ///
    /// Непустая история при этом стирается целиком, счётчик раундов
    /// сбрасывается: её строки ссылаются на снапшоты удалённого игрока,
    /// и частичная чистка дала бы дыры в нумерации.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), EngineError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(EngineError::PlayerNotFound(id))?;

        if !self.history.is_empty() {
            self.history.clear();
            self.round_number = 0;
        }

        self.players.remove(idx);
        Ok(())
    }

    /// Сыграть раунд: посчитать, применить, записать в историю.
    ///
    /// `cards_by_loser` – количество оставшихся карт по id проигравшего.
    /// Проигравшие берутся в порядке состава; значения вне [1, 13]
    /// прижимаются к границе внутри расчёта.
    pub fn play_round(
        &mut self,
        winner_id: Option<PlayerId>,
        cards_by_loser: &[(PlayerId, i32)],
        is_instant_win: bool,
        config: &RuleConfig,
    ) -> Result<RoundResult, EngineError> {
        let winner_id = winner_id.ok_or(EngineError::NoWinnerSelected)?;

        if self.players.len() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }

        if self.player(winner_id).is_none() {
            return Err(EngineError::PlayerNotFound(winner_id));
        }

        // Каждый ключ обязан указывать на текущего НЕ-победителя.
        let mut cards: HashMap<PlayerId, i32> = HashMap::new();
        for &(pid, raw) in cards_by_loser {
            if pid == winner_id || self.player(pid).is_none() {
                return Err(EngineError::UnknownLoser(pid));
            }
            cards.insert(pid, raw);
        }

        let mut result = {
            let winner = self
                .player(winner_id)
                .ok_or(EngineError::PlayerNotFound(winner_id))?;

            let mut losers: Vec<(&Player, i32)> = Vec::new();
            for p in self.players.iter().filter(|p| p.id != winner_id) {
                let raw = cards
                    .get(&p.id)
                    .copied()
                    .ok_or(EngineError::MissingCardCount(p.id))?;
                losers.push((p, raw));
            }

            compute_round(winner, &losers, is_instant_win, config)
        };

        self.round_number += 1;
        result.round_number = self.round_number;

        ledger::apply_round(&mut self.players, &result);
        self.history.record(result.clone());

        Ok(result)
    }

    /// Откатить последний раунд. Ровно один раунд за вызов.
    pub fn undo_last_round(&mut self) -> Result<RoundResult, EngineError> {
        let last = self.history.pop_last().ok_or(EngineError::NothingToUndo)?;

        self.round_number = self.round_number.saturating_sub(1);
        ledger::reverse_round(&mut self.players, &last);

        Ok(last)
    }

    /// Ручная корректировка счёта.
    ///
    /// Мимо истории, откату через `undo_last_round` не подлежит.
    pub fn manual_adjust(&mut self, id: PlayerId, delta: Points) -> Result<(), EngineError> {
        if delta.is_zero() {
            return Err(EngineError::ZeroAdjustment);
        }

        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(EngineError::PlayerNotFound(id))?;

        player.score += delta;
        Ok(())
    }

    /// Полный сброс к начальному состоянию, включая счётчик id.
    pub fn reset(&mut self) {
        self.players.clear();
        self.history.clear();
        self.round_number = 0;
        self.ids = PlayerIdAllocator::new();
    }
}
