// src/bin/holdem_dev_cli.rs

use holdem_sim::domain::chips::Chips;
use holdem_sim::domain::table::{Stakes, Table};
use holdem_sim::engine::{HandStatus, PlayerActionKind};
use holdem_sim::sim::{GameConfig, GameSession};

/// Потолок раздач на случай, если фишки долго ходят по кругу.
const MAX_HANDS: u32 = 500;

fn main() {
    println!("holdem_dev_cli: стартуем dev-прогон стола…");

    let config = GameConfig {
        human_players: 1,
        bot_players: 3,
        starting_stack: Chips::new(1_000),
        stakes: Stakes::new(Chips::new(10), Chips::new(20)),
    };

    let mut session = match GameSession::new(&config) {
        Ok(s) => s,
        Err(e) => {
            println!("[CLI] ОШИБКА конфигурации: {e}");
            return;
        }
    };

    println!(
        "[CLI] Стол на {} игроков, стек {}, блайнды {}/{}.",
        config.total_players(),
        config.starting_stack,
        config.stakes.small_blind,
        config.stakes.big_blind,
    );

    let mut hands_played = 0u32;

    while !session.is_game_over() {
        hands_played += 1;
        if hands_played > MAX_HANDS {
            println!("[CLI] Превышен лимит раздач ({MAX_HANDS}), выходим.");
            break;
        }

        match session.start_hand() {
            // Блайнды поставили всех в олл-ин — раздача доиграна сразу.
            Ok(HandStatus::Finished(_)) => {
                print_hand_result(&session, hands_played);
                continue;
            }
            Ok(HandStatus::Ongoing) => {}
            Err(e) => {
                println!("[CLI] ОШИБКА в start_hand: {e}");
                return;
            }
        }

        // Ходы: боты сами, за "человека" жмём check/call.
        loop {
            match session.run_bots() {
                Ok(HandStatus::Finished(_)) => break,
                Ok(HandStatus::Ongoing) => {}
                Err(e) => {
                    println!("[CLI] ОШИБКА в run_bots: {e}");
                    return;
                }
            }

            let Some(seat) = session.current_actor() else {
                break;
            };
            let Some(player_id) = session.table().player(seat).map(|p| p.player_id) else {
                break;
            };
            let Some(legal) = session.legal_actions_now() else {
                break;
            };

            let kind = if legal.can_check {
                PlayerActionKind::Check
            } else if legal.can_call {
                PlayerActionKind::Call
            } else {
                PlayerActionKind::Fold
            };

            match session.apply_player_action(player_id, kind) {
                Ok(HandStatus::Finished(_)) => break,
                Ok(HandStatus::Ongoing) => {}
                Err(e) => {
                    println!("[CLI] ОШИБКА в apply_player_action: {e}");
                    return;
                }
            }
        }

        print_hand_result(&session, hands_played);
    }

    println!();
    match session.champion() {
        Some(p) => println!(
            "[CLI] Игра окончена за {} раздач(и). Чемпион: {} (стек {}).",
            hands_played, p.name, p.stack
        ),
        None => println!("[CLI] Прогон остановлен после {hands_played} раздач."),
    }
    print_table_state(session.table());
}

fn print_hand_result(session: &GameSession, hand_no: u32) {
    println!();
    println!("================ HAND {hand_no} =================");

    if let Some(summary) = session.last_summary() {
        println!(
            "street_reached={:?} total_pot={} board={:?}",
            summary.street_reached,
            summary.total_pot,
            summary
                .board
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>(),
        );
        for r in &summary.results {
            println!(
                "  player_id={} | won={} | winner={}",
                r.player_id, r.won, r.is_winner
            );
        }
    }

    // Журнал раздачи — JSON-строки, как их увидел бы UI-подписчик.
    if let Some(history) = session.last_history() {
        for event in &history.events {
            match serde_json::to_string(event) {
                Ok(line) => println!("  {line}"),
                Err(e) => println!("  [CLI] не сериализовалось: {e}"),
            }
        }
    }

    print_table_state(session.table());
}

fn print_table_state(table: &Table) {
    println!("---------------- TABLE STATE ----------------");
    println!(
        "hand_number={} street={:?} dealer_button={:?} pot={}",
        table.hand_number, table.street, table.dealer_button, table.total_pot
    );
    for (idx, seat) in table.seats.iter().enumerate() {
        if let Some(p) = seat {
            println!(
                "  seat {} | id={} | name={} | stack={} | status={:?}",
                idx, p.player_id, p.name, p.stack, p.status
            );
        }
    }
    println!("---------------------------------------------");
}
