use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Монотонный выдатчик id игроков.
///
/// Id никогда не переиспользуются в рамках сессии, даже после удаления
/// игрока. Счётчик сериализуется в снапшот вместе с остальным состоянием,
/// поэтому атомики тут не нужны – мутатор всегда один.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PlayerIdAllocator {
    next: PlayerId,
}

impl Default for PlayerIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerIdAllocator {
    /// Счёт начинается с 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Восстановить счётчик из снапшота. Ноль молча поднимается до 1.
    pub fn from_next(next: PlayerId) -> Self {
        Self { next: next.max(1) }
    }

    /// Какой id будет выдан следующим.
    pub fn peek_next(&self) -> PlayerId {
        self.next
    }

    /// Выдать следующий id.
    pub fn next_id(&mut self) -> PlayerId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Поднять счётчик выше уже виденного id.
    ///
    /// Нужен при загрузке снапшота: кривая запись без счётчика не должна
    /// привести к повторной выдаче занятого id.
    pub fn ensure_above(&mut self, seen: PlayerId) {
        if self.next <= seen {
            self.next = seen + 1;
        }
    }
}
