// tests/engine_calculator_tests.rs
//
// Чистый расчёт раунда (compute_round):
//  1) Базовый сценарий: Alice выигрывает, Bob 5 карт, Carol 13 карт
//  2) Тот же сценарий с tới trắng – все потери удваиваются
//  3) Нулевая сумма изменений при любых правилах
//  4) Прижатие карт: 0 считается как 1, 99 – как 13
//  5) Причина "instant win" без префикса у проигравшего с <10 картами
//  6) Текст причины для 10+ карт
//  7) Кривые правила (нули) внутри расчёта берут дефолты
//  8) Порядок строк: победитель первый, проигравшие в порядке входа;
//     номер раунда остаётся 0 – его проставляет сессия

use tienlen_engine::domain::{Player, Points, RuleConfig};
use tienlen_engine::engine::compute_round;

//
// ---------- helpers ----------
//

fn alice() -> Player {
    Player::new(1, "Alice")
}

fn bob() -> Player {
    Player::new(2, "Bob")
}

fn carol() -> Player {
    Player::new(3, "Carol")
}

#[test]
fn basic_round_alice_wins() {
    let (w, b, c) = (alice(), bob(), carol());
    let result = compute_round(&w, &[(&b, 5), (&c, 13)], false, &RuleConfig::default());

    assert_eq!(result.winner_id, 1);
    assert_eq!(result.winner_name, "Alice");
    assert!(!result.is_instant_win);
    assert_eq!(result.player_results.len(), 3);

    // Победитель – первая строка.
    let winner = &result.player_results[0];
    assert_eq!(winner.player_id, 1);
    assert_eq!(winner.remaining_cards, 0);
    assert_eq!(winner.points_change, Points::new(57));
    assert_eq!(winner.reason, "win");

    let bob_entry = &result.player_results[1];
    assert_eq!(bob_entry.points_change, Points::new(-5));
    assert_eq!(bob_entry.reason, "5 cards remaining");

    let carol_entry = &result.player_results[2];
    assert_eq!(carol_entry.points_change, Points::new(-52));
    assert_eq!(carol_entry.reason, "full hand (13 cards)");
}

#[test]
fn instant_win_doubles_everything() {
    let (w, b, c) = (alice(), bob(), carol());
    let result = compute_round(&w, &[(&b, 5), (&c, 13)], true, &RuleConfig::default());

    assert!(result.is_instant_win);
    assert_eq!(result.player_results[0].points_change, Points::new(114));

    // У Bob <10 карт, значит причина – голое "instant win".
    let bob_entry = &result.player_results[1];
    assert_eq!(bob_entry.points_change, Points::new(-10));
    assert_eq!(bob_entry.reason, "instant win");

    let carol_entry = &result.player_results[2];
    assert_eq!(carol_entry.points_change, Points::new(-104));
    assert_eq!(carol_entry.reason, "full hand (13 cards) + instant win");
}

#[test]
fn points_changes_always_sum_to_zero() {
    let (w, b, c) = (alice(), bob(), carol());

    let configs = [
        RuleConfig::default(),
        RuleConfig {
            base_points: 7,
            instant_win_multiplier: 3,
            ten_cards_multiplier: 5,
            full_cards_multiplier: 11,
        },
        // Нули заменятся дефолтами, сумма всё равно нулевая.
        RuleConfig {
            base_points: 0,
            instant_win_multiplier: 0,
            ten_cards_multiplier: 0,
            full_cards_multiplier: 0,
        },
    ];

    for config in &configs {
        for instant in [false, true] {
            for cards in [(1, 13), (9, 10), (12, 3)] {
                let result = compute_round(&w, &[(&b, cards.0), (&c, cards.1)], instant, config);
                assert_eq!(
                    result.total_points_change(),
                    Points::ZERO,
                    "config={:?} instant={} cards={:?}",
                    config,
                    instant,
                    cards
                );
            }
        }
    }
}

#[test]
fn out_of_range_cards_behave_like_boundary() {
    let (w, b, c) = (alice(), bob(), carol());
    let config = RuleConfig::default();

    let low_raw = compute_round(&w, &[(&b, 0), (&c, 2)], false, &config);
    let low_clamped = compute_round(&w, &[(&b, 1), (&c, 2)], false, &config);
    assert_eq!(low_raw.player_results, low_clamped.player_results);

    let high_raw = compute_round(&w, &[(&b, 99), (&c, 2)], false, &config);
    let high_clamped = compute_round(&w, &[(&b, 13), (&c, 2)], false, &config);
    assert_eq!(high_raw.player_results, high_clamped.player_results);
}

#[test]
fn ten_plus_cards_reason_and_multiplier() {
    let (w, b, c) = (alice(), bob(), carol());
    let result = compute_round(&w, &[(&b, 11), (&c, 2)], false, &RuleConfig::default());

    let bob_entry = &result.player_results[1];
    // 11 * 1 * 2 = 22
    assert_eq!(bob_entry.points_change, Points::new(-22));
    assert_eq!(bob_entry.reason, "11 cards (≥10)");

    // 10 – нижняя граница порога.
    let result = compute_round(&w, &[(&b, 10), (&c, 2)], false, &RuleConfig::default());
    assert_eq!(result.player_results[1].points_change, Points::new(-20));

    // 9 – порог ещё не включается.
    let result = compute_round(&w, &[(&b, 9), (&c, 2)], false, &RuleConfig::default());
    assert_eq!(result.player_results[1].points_change, Points::new(-9));
    assert_eq!(result.player_results[1].reason, "9 cards remaining");
}

#[test]
fn zeroed_config_falls_back_to_defaults() {
    let (w, b, c) = (alice(), bob(), carol());
    let zeroed = RuleConfig {
        base_points: 0,
        instant_win_multiplier: 0,
        ten_cards_multiplier: 0,
        full_cards_multiplier: 0,
    };

    let with_zeroed = compute_round(&w, &[(&b, 5), (&c, 13)], true, &zeroed);
    let with_defaults = compute_round(&w, &[(&b, 5), (&c, 13)], true, &RuleConfig::default());
    assert_eq!(with_zeroed.player_results, with_defaults.player_results);
}

#[test]
fn entry_order_and_round_number() {
    let (w, b, c) = (alice(), bob(), carol());
    // Проигравшие в обратном порядке входа – порядок сохраняется.
    let result = compute_round(&w, &[(&c, 2), (&b, 3)], false, &RuleConfig::default());

    assert_eq!(result.round_number, 0);
    let ids: Vec<_> = result.player_results.iter().map(|e| e.player_id).collect();
    assert_eq!(ids, vec![1, 3, 2]);

    // Имена – снапшоты, не ссылки.
    assert_eq!(result.player_results[1].player_name, "Carol");
}
