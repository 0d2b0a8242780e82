use holdem_sim::domain::{
    chips::Chips,
    hand::Street,
    player::{Player, PlayerStatus},
    table::{SeatIndex, Stakes, Table},
};
use holdem_sim::engine::{
    apply_action, start_hand, EngineError, HandStatus, PlayerAction, PlayerActionKind,
    RandomSource,
};
use holdem_sim::eval::PairEvaluator;

#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

fn make_table(stacks: &[u64], sb: u64, bb: u64) -> Table {
    let mut table = Table::new(stacks.len() as u8, Stakes::new(Chips(sb), Chips(bb)));
    for (i, &stack) in stacks.iter().enumerate() {
        table.seats[i] = Some(Player::new(
            i as u64,
            format!("P{i}"),
            Chips(stack),
            false,
        ));
    }
    table
}

fn act(seat: SeatIndex, kind: PlayerActionKind) -> PlayerAction {
    PlayerAction {
        player_id: seat as u64,
        seat,
        kind,
    }
}

/// Отклонённое действие не оставляет следов ни на столе, ни в движке.
#[test]
fn rejected_action_does_not_mutate_state() {
    let mut table = make_table(&[1000, 1000, 1000], 10, 20);
    let mut rng = DummyRng;
    let mut engine = start_hand(&mut table, &mut rng).unwrap();

    let table_before = table.clone();
    let betting_before = engine.betting.clone();
    let pot_before = engine.pot.clone();
    let events_before = engine.history.events.len();

    // Чек при неуравненной ставке.
    let err = apply_action(
        &mut table,
        &mut engine,
        act(0, PlayerActionKind::Check),
        &PairEvaluator,
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::CannotCheck));

    // Рейз ниже минимального шага (current_bet=20, BB=20 => минимум 40).
    let err = apply_action(
        &mut table,
        &mut engine,
        act(0, PlayerActionKind::Raise(Chips(25))),
        &PairEvaluator,
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::RaiseTooSmall));

    assert_eq!(table, table_before);
    assert_eq!(engine.betting, betting_before);
    assert_eq!(engine.pot, pot_before);
    assert_eq!(engine.history.events.len(), events_before);
    // Ход остался у того же игрока.
    assert_eq!(engine.current_actor, Some(0));
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let mut table = make_table(&[1000, 1000, 1000], 10, 20);
    let mut rng = DummyRng;
    let mut engine = start_hand(&mut table, &mut rng).unwrap();

    let err = apply_action(
        &mut table,
        &mut engine,
        act(1, PlayerActionKind::Fold),
        &PairEvaluator,
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::NotPlayersTurn(1)));

    // Чужой player_id на чужом месте тоже не проходит.
    let forged = PlayerAction {
        player_id: 2,
        seat: 0,
        kind: PlayerActionKind::Fold,
    };
    let err = apply_action(&mut table, &mut engine, forged, &PairEvaluator).unwrap_err();
    assert!(matches!(err, EngineError::PlayerNotAtTable(2)));
}

/// Рейз до 40 легален и переоткрывает раунд для уже походивших.
#[test]
fn raise_reopens_action_for_players_who_acted() {
    let mut table = make_table(&[1000, 1000, 1000], 10, 20);
    let mut rng = DummyRng;
    let mut engine = start_hand(&mut table, &mut rng).unwrap();

    // Seat 0 уравнял и вышел из очереди.
    apply_action(&mut table, &mut engine, act(0, PlayerActionKind::Call), &PairEvaluator).unwrap();
    assert_eq!(engine.betting.to_act, vec![1, 2]);

    // SB делает рейз до 40 — seat 0 снова должен ходить.
    apply_action(
        &mut table,
        &mut engine,
        act(1, PlayerActionKind::Raise(Chips(40))),
        &PairEvaluator,
    )
    .unwrap();

    assert_eq!(engine.betting.current_bet, Chips(40));
    assert_eq!(engine.betting.last_aggressor, Some(1));
    assert_eq!(engine.betting.to_act, vec![2, 0]);
    assert_eq!(engine.current_actor, Some(2));

    // Доплата SB: 40 - 10 = 30.
    assert_eq!(table.player(1).unwrap().stack, Chips(960));
    assert_eq!(engine.pot.total, Chips(10 + 20 + 20 + 30));
}

/// Короткий колл: стек 15 против ставки 20 — списывается 15, игрок в
/// олл-ине и считается походившим до конца раздачи.
#[test]
fn all_in_call_is_clamped_to_stack() {
    let mut table = make_table(&[15, 1000, 1000], 10, 20);
    let mut rng = DummyRng;
    let mut engine = start_hand(&mut table, &mut rng).unwrap();

    assert_eq!(engine.current_actor, Some(0));
    apply_action(&mut table, &mut engine, act(0, PlayerActionKind::Call), &PairEvaluator).unwrap();

    let short = table.player(0).unwrap();
    assert_eq!(short.stack, Chips::ZERO);
    assert_eq!(short.current_bet, Chips(15));
    assert_eq!(short.status, PlayerStatus::AllIn);
    assert_eq!(engine.pot.contribution(0), Chips(15));

    // Раунд продолжает SB, очередь без seat 0.
    assert_eq!(engine.betting.to_act, vec![1, 2]);

    apply_action(&mut table, &mut engine, act(1, PlayerActionKind::Call), &PairEvaluator).unwrap();
    apply_action(&mut table, &mut engine, act(2, PlayerActionKind::Check), &PairEvaluator).unwrap();

    // На флопе торгуются только два живых стека, олл-ин пропускается.
    assert_eq!(table.street, Street::Flop);
    assert_eq!(engine.betting.to_act, vec![1, 2]);
    assert_eq!(engine.current_actor, Some(1));
}

/// Рейз на весь стек — легальный олл-ин, если дотягивает до минимального шага.
#[test]
fn raise_to_entire_stack_goes_all_in() {
    let mut table = make_table(&[100, 1000, 1000], 10, 20);
    let mut rng = DummyRng;
    let mut engine = start_hand(&mut table, &mut rng).unwrap();

    apply_action(
        &mut table,
        &mut engine,
        act(0, PlayerActionKind::Raise(Chips(100))),
        &PairEvaluator,
    )
    .unwrap();

    let p = table.player(0).unwrap();
    assert_eq!(p.stack, Chips::ZERO);
    assert_eq!(p.status, PlayerStatus::AllIn);
    assert_eq!(engine.betting.current_bet, Chips(100));
    assert_eq!(engine.betting.to_act, vec![1, 2]);
}

/// Фолды по кругу: после каждого действия ход переходит следующему
/// не сфолдившему месту по часовой, с переходом через край стола.
#[test]
fn turn_passes_clockwise_skipping_folded() {
    let mut table = make_table(&[500, 500, 500, 500], 10, 20);
    let mut rng = DummyRng;
    let mut engine = start_hand(&mut table, &mut rng).unwrap();

    // Дилер 0, SB 1, BB 2, первым ходит seat 3.
    assert_eq!(engine.current_actor, Some(3));

    apply_action(&mut table, &mut engine, act(3, PlayerActionKind::Fold), &PairEvaluator).unwrap();
    assert_eq!(engine.current_actor, Some(0));

    apply_action(&mut table, &mut engine, act(0, PlayerActionKind::Call), &PairEvaluator).unwrap();
    assert_eq!(engine.current_actor, Some(1));

    apply_action(&mut table, &mut engine, act(1, PlayerActionKind::Call), &PairEvaluator).unwrap();
    apply_action(&mut table, &mut engine, act(2, PlayerActionKind::Check), &PairEvaluator).unwrap();

    // Флоп: сфолдивший seat 3 в очередь не попадает.
    assert_eq!(table.street, Street::Flop);
    assert_eq!(engine.betting.to_act, vec![1, 2, 0]);
}
