// src/bin/tienlen_dev_cli.rs

use tienlen_engine::api::{
    apply_command, build_session_view, AddPlayerCommand, AdjustScoreCommand, Command,
    CommandResponse, LoserCardsEntry, PlayRoundCommand, RemovePlayerCommand, SessionViewDto,
};
use tienlen_engine::domain::RuleConfig;
use tienlen_engine::engine::GameSession;
use tienlen_engine::infra::{load_session_or_default, JsonFileStorage, ScoreStorage};

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("tienlen_dev_cli: стартуем демо-сессию…");

    // 1. Хранилище – JSON-файл рядом с бинарём (аналог localStorage).
    let mut storage = JsonFileStorage::new("tienlen_session.json");

    // 2. Загружаем прошлую сессию или начинаем с пустой.
    let mut session = load_session_or_default(&storage);
    if !session.players().is_empty() {
        println!(
            "Нашёлся прошлый снапшот: {} игрок(ов), {} раунд(ов). Сбрасываем для демо.",
            session.players().len(),
            session.history().len()
        );
        run(&mut session, &mut storage, Command::ResetGame);
    }

    // 3. Состав: три игрока.
    let alice = add_player(&mut session, &mut storage, "Alice");
    let bob = add_player(&mut session, &mut storage, "Bob");
    let carol = add_player(&mut session, &mut storage, "Carol");

    // 4. Правила: дефолтные (база 1, tới trắng ×2, 10+ карт ×2, cháy ×4).
    let rules = RuleConfig::default();

    println!();
    println!("================ ROUND 1: обычная победа Alice =================");
    run(
        &mut session,
        &mut storage,
        Command::PlayRound(PlayRoundCommand {
            winner_id: Some(alice),
            loser_cards: vec![
                LoserCardsEntry {
                    player_id: bob,
                    remaining_cards: 5,
                },
                LoserCardsEntry {
                    player_id: carol,
                    remaining_cards: 13,
                },
            ],
            is_instant_win: false,
            rules,
        }),
    );
    print_session(&build_session_view(&session));

    println!();
    println!("================ ROUND 2: tới trắng у Bob ======================");
    run(
        &mut session,
        &mut storage,
        Command::PlayRound(PlayRoundCommand {
            winner_id: Some(bob),
            loser_cards: vec![
                LoserCardsEntry {
                    player_id: alice,
                    remaining_cards: 7,
                },
                LoserCardsEntry {
                    player_id: carol,
                    remaining_cards: 11,
                },
            ],
            is_instant_win: true,
            rules,
        }),
    );
    print_session(&build_session_view(&session));

    println!();
    println!("================ Ручная корректировка: Carol +3 ================");
    run(
        &mut session,
        &mut storage,
        Command::AdjustScore(AdjustScoreCommand {
            player_id: carol,
            delta: 3,
        }),
    );
    print_session(&build_session_view(&session));

    println!();
    println!("================ Откат последнего раунда =======================");
    run(&mut session, &mut storage, Command::UndoLastRound);
    print_session(&build_session_view(&session));

    println!();
    println!("================ Удаление Carol (история чистится) =============");
    run(
        &mut session,
        &mut storage,
        Command::RemovePlayer(RemovePlayerCommand { player_id: carol }),
    );
    print_session(&build_session_view(&session));

    println!();
    println!(
        "Готово. Снапшот лежит в {:?} – следующий запуск его подхватит.",
        storage.path()
    );
}

fn add_player(
    session: &mut GameSession,
    storage: &mut impl ScoreStorage,
    name: &str,
) -> tienlen_engine::PlayerId {
    match run(
        session,
        storage,
        Command::AddPlayer(AddPlayerCommand {
            name: name.to_string(),
        }),
    ) {
        Some(CommandResponse::PlayerAdded { player_id, .. }) => {
            println!("Добавлен игрок {} (id={})", name, player_id);
            player_id
        }
        _ => panic!("не удалось добавить игрока {}", name),
    }
}

fn run(
    session: &mut GameSession,
    storage: &mut impl ScoreStorage,
    command: Command,
) -> Option<CommandResponse> {
    match apply_command(session, storage, command) {
        Ok(response) => Some(response),
        Err(err) => {
            eprintln!("Команда отклонена: {:?}", err);
            None
        }
    }
}

fn print_session(view: &SessionViewDto) {
    println!("Фаза: {:?} | раунд #{}", view.phase, view.round_number);
    for p in &view.players {
        println!("  {:<10} {}", p.name, p.score_display);
    }
    if let Some(last) = view.history.first() {
        println!(
            "  Последний раунд {}: победил {}{}",
            last.round_number,
            last.winner_name,
            if last.is_instant_win {
                " (tới trắng)"
            } else {
                ""
            }
        );
        for r in &last.results {
            println!("    {:<10} {:>6}  ({})", r.player_name, r.points_change, r.reason);
        }
    }
}
