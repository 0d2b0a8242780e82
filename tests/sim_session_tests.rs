use holdem_sim::bot::ThresholdPolicy;
use holdem_sim::domain::chips::Chips;
use holdem_sim::domain::table::{Stakes, Table};
use holdem_sim::engine::{HandStatus, PlayerActionKind};
use holdem_sim::infra::DeterministicRng;
use holdem_sim::sim::{ConfigError, GameConfig, GameSession, SessionError};

fn base_config() -> GameConfig {
    GameConfig {
        human_players: 1,
        bot_players: 2,
        starting_stack: Chips(500),
        stakes: Stakes::new(Chips(10), Chips(20)),
    }
}

fn total_chips(table: &Table) -> u64 {
    table
        .seats
        .iter()
        .filter_map(|s| s.as_ref())
        .map(|p| p.stack.0)
        .sum()
}

//
// config.rs
//
#[test]
fn config_validation_rejects_bad_setups() {
    let mut c = base_config();
    c.human_players = 0;
    assert_eq!(c.validate(), Err(ConfigError::NoHumanPlayers));

    let mut c = base_config();
    c.bot_players = 0;
    c.human_players = 1;
    assert_eq!(c.validate(), Err(ConfigError::PlayerCountOutOfRange(1)));

    let mut c = base_config();
    c.bot_players = 10;
    assert_eq!(c.validate(), Err(ConfigError::PlayerCountOutOfRange(11)));

    let mut c = base_config();
    c.starting_stack = Chips::ZERO;
    assert_eq!(c.validate(), Err(ConfigError::ZeroStartingStack));

    let mut c = base_config();
    c.stakes = Stakes::new(Chips::ZERO, Chips(20));
    assert_eq!(c.validate(), Err(ConfigError::ZeroBlinds));

    // BB обязан быть ровно 2×SB — конвенция проверяется на входе.
    let mut c = base_config();
    c.stakes = Stakes::new(Chips(10), Chips(25));
    assert!(matches!(
        c.validate(),
        Err(ConfigError::BlindsNotDoubled { .. })
    ));

    assert!(base_config().validate().is_ok());
}

#[test]
fn session_rejects_invalid_config_before_creating_state() {
    let mut c = base_config();
    c.human_players = 0;
    assert!(GameSession::new(&c).is_err());
}

//
// session.rs
//
#[test]
fn session_seats_humans_first_then_bots() {
    let session = GameSession::new(&base_config()).unwrap();
    let table = session.table();

    assert_eq!(table.seated_count(), 3);

    let p0 = table.player(0).unwrap();
    assert!(p0.is_human);
    assert_eq!(p0.name, "Player 1");
    assert_eq!(p0.stack, Chips(500));

    let p1 = table.player(1).unwrap();
    assert!(!p1.is_human);
    assert_eq!(p1.name, "Bot 1");

    let p2 = table.player(2).unwrap();
    assert!(!p2.is_human);
    assert_eq!(p2.name, "Bot 2");

    assert!(!session.is_game_over());
    assert!(session.champion().is_none());
}

#[test]
fn run_bots_stops_at_human_turn() {
    let mut session =
        GameSession::with_rng(&base_config(), DeterministicRng::from_seed(5)).unwrap();
    for seat in [1u8, 2] {
        session.set_bot_policy(seat, Box::new(ThresholdPolicy::from_seed(90 + seat as u64)));
    }

    session.start_hand().unwrap();

    // Боты ходят, пока очередь не дойдёт до человека или раздача не кончится.
    match session.run_bots().unwrap() {
        HandStatus::Ongoing => {
            assert_eq!(session.current_actor_is_human(), Some(true));
            assert!(session.legal_actions_now().is_some());
        }
        HandStatus::Finished(_) => {
            assert!(session.last_summary().is_some());
        }
    }
}

#[test]
fn session_errors_without_active_hand() {
    let mut session = GameSession::new(&base_config()).unwrap();

    assert!(matches!(
        session.apply_player_action(0, PlayerActionKind::Fold),
        Err(SessionError::NoActiveHand)
    ));
    assert!(matches!(session.step_bot(), Err(SessionError::NoActiveHand)));
    assert!(matches!(
        session.run_bots(),
        Err(SessionError::NoActiveHand)
    ));
    assert!(matches!(
        session.abort_hand(),
        Err(SessionError::NoActiveHand)
    ));
}

#[test]
fn session_rejects_unknown_player() {
    let mut session = GameSession::new(&base_config()).unwrap();
    session.start_hand().unwrap();

    assert!(matches!(
        session.apply_player_action(99, PlayerActionKind::Fold),
        Err(SessionError::UnknownPlayer(99))
    ));
}

#[test]
fn session_abort_returns_contributions() {
    let mut session =
        GameSession::with_rng(&base_config(), DeterministicRng::from_seed(11)).unwrap();
    session.start_hand().unwrap();

    let summary = session.abort_hand().unwrap();
    assert!(summary.results.iter().all(|r| !r.is_winner));

    // Всё вернулось: фишек ровно столько, сколько раздали на старте.
    assert_eq!(total_chips(session.table()), 1500);
    assert!(session.hand().is_none());
    assert!(session.last_history().is_some());
}

/// Многораздачная игра: фишки сохраняются после каждой раздачи,
/// номера раздач растут, вылетевшие больше не играют.
#[test]
fn chips_are_conserved_across_many_hands() {
    let mut session =
        GameSession::with_rng(&base_config(), DeterministicRng::from_seed(1234)).unwrap();
    for seat in [1u8, 2] {
        session.set_bot_policy(seat, Box::new(ThresholdPolicy::from_seed(seat as u64)));
    }

    let expected_total = 1500;
    let mut hands = 0u32;

    while !session.is_game_over() && hands < 100 {
        hands += 1;

        match session.start_hand().unwrap() {
            HandStatus::Finished(_) => {
                assert_eq!(total_chips(session.table()), expected_total);
                continue;
            }
            HandStatus::Ongoing => {}
        }

        // Человек (seat 0) играет по простейшей схеме check/call.
        loop {
            match session.run_bots().unwrap() {
                HandStatus::Finished(_) => break,
                HandStatus::Ongoing => {}
            }
            if session.hand().is_none() {
                break;
            }

            let legal = session.legal_actions_now().expect("нет легальных действий");
            let kind = if legal.can_check {
                PlayerActionKind::Check
            } else if legal.can_call {
                PlayerActionKind::Call
            } else {
                PlayerActionKind::Fold
            };

            match session.apply_player_action(0, kind).unwrap() {
                HandStatus::Finished(_) => break,
                HandStatus::Ongoing => {}
            }
        }

        // Банк разнесён по стекам, общее число фишек неизменно.
        assert!(session.hand().is_none());
        assert_eq!(total_chips(session.table()), expected_total);
        assert_eq!(session.table().hand_number, hands as u64);
        assert!(session.last_summary().is_some());
    }

    if session.is_game_over() {
        let champion = session.champion().expect("должен быть чемпион");
        assert_eq!(champion.stack, Chips(expected_total));
        // После окончания игры новые раздачи не стартуют.
        assert!(matches!(
            session.start_hand(),
            Err(SessionError::GameOver)
        ));
    }
}
