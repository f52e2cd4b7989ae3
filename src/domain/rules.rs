use serde::{Deserialize, Serialize};

/// Значения по умолчанию для правил подсчёта.
pub const DEFAULT_BASE_POINTS: u32 = 1;
pub const DEFAULT_INSTANT_WIN_MULTIPLIER: u32 = 2;
pub const DEFAULT_TEN_CARDS_MULTIPLIER: u32 = 2;
pub const DEFAULT_FULL_CARDS_MULTIPLIER: u32 = 4;

/// Границы количества оставшихся карт у проигравшего.
pub const MIN_REMAINING_CARDS: u8 = 1;
pub const MAX_REMAINING_CARDS: u8 = 13;

/// "Cháy" – проигравший не скинул ни одной карты.
pub const FULL_HAND_CARDS: u8 = 13;

/// С этого количества карт включается повышенный множитель.
pub const TEN_CARDS_THRESHOLD: u8 = 10;

/// Настраиваемые правила подсчёта очков.
///
/// Все четыре поля – положительные целые. Значения читаются заново
/// при каждом расчёте раунда: смена настроек действует только вперёд,
/// история пересчёту не подлежит.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    /// Базовые очки за одну оставшуюся карту.
    pub base_points: u32,
    /// Множитель за "tới trắng" (мгновенную победу).
    pub instant_win_multiplier: u32,
    /// Множитель за 10+ оставшихся карт.
    pub ten_cards_multiplier: u32,
    /// Множитель за полную руку (13 карт, "cháy").
    pub full_cards_multiplier: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            base_points: DEFAULT_BASE_POINTS,
            instant_win_multiplier: DEFAULT_INSTANT_WIN_MULTIPLIER,
            ten_cards_multiplier: DEFAULT_TEN_CARDS_MULTIPLIER,
            full_cards_multiplier: DEFAULT_FULL_CARDS_MULTIPLIER,
        }
    }
}

impl RuleConfig {
    /// Нулевые поля заменяются значениями по умолчанию.
    ///
    /// Политика намеренно мягкая: кривое значение в настройках не
    /// ошибка, а повод взять дефолт для этого поля.
    pub fn sanitized(self) -> RuleConfig {
        RuleConfig {
            base_points: non_zero_or(self.base_points, DEFAULT_BASE_POINTS),
            instant_win_multiplier: non_zero_or(
                self.instant_win_multiplier,
                DEFAULT_INSTANT_WIN_MULTIPLIER,
            ),
            ten_cards_multiplier: non_zero_or(self.ten_cards_multiplier, DEFAULT_TEN_CARDS_MULTIPLIER),
            full_cards_multiplier: non_zero_or(
                self.full_cards_multiplier,
                DEFAULT_FULL_CARDS_MULTIPLIER,
            ),
        }
    }

    /// Разбор "сырых" строк из формы настроек.
    ///
    /// Каждое поле парсится независимо; нечисловое или неположительное
    /// значение молча превращается в дефолт этого поля.
    pub fn from_strings(base: &str, instant_win: &str, ten_cards: &str, full_cards: &str) -> Self {
        RuleConfig {
            base_points: parse_field(base, DEFAULT_BASE_POINTS),
            instant_win_multiplier: parse_field(instant_win, DEFAULT_INSTANT_WIN_MULTIPLIER),
            ten_cards_multiplier: parse_field(ten_cards, DEFAULT_TEN_CARDS_MULTIPLIER),
            full_cards_multiplier: parse_field(full_cards, DEFAULT_FULL_CARDS_MULTIPLIER),
        }
    }
}

fn non_zero_or(value: u32, default: u32) -> u32 {
    if value == 0 {
        default
    } else {
        value
    }
}

fn parse_field(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(v) if v > 0 => v,
        _ => default,
    }
}

/// Привести количество оставшихся карт к диапазону [1, 13].
///
/// Значения вне диапазона не считаются ошибкой – они молча
/// прижимаются к границе.
pub fn clamp_remaining_cards(raw: i32) -> u8 {
    raw.clamp(MIN_REMAINING_CARDS as i32, MAX_REMAINING_CARDS as i32) as u8
}
