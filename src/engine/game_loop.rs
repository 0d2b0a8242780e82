use std::collections::HashMap;

use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{HandRank, HandSummary, PlayerHandResult, Street};
use crate::domain::player::{Player, PlayerStatus};
use crate::domain::table::Table;
use crate::domain::{HandId, SeatIndex};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::events::{HandEventKind, HandHistory};
use crate::engine::positions::{collect_seats_in_hand_from, next_dealer};
use crate::engine::pot::Pot;
use crate::engine::side_pots::{compute_side_pots, SidePot};
use crate::engine::validation::validate_action;
use crate::engine::RandomSource;
use crate::eval::HandEvaluator;

/// Статус раздачи для внешнего кода.
#[derive(Clone, Debug)]
pub enum HandStatus {
    Ongoing,
    Finished(HandSummary),
}

/// Состояние одной раздачи. Живёт от start_hand до расчёта,
/// стол при этом остаётся владельцем игроков и борда.
#[derive(Debug)]
pub struct HandEngine {
    pub hand_number: HandId,
    pub deck: Deck,
    pub betting: BettingState,
    pub pot: Pot,
    pub side_pots: Vec<SidePot>,
    /// Чей сейчас ход (seat).
    pub current_actor: Option<SeatIndex>,
    /// Журнал раздачи.
    pub history: HandHistory,
    /// Сумма всех стеков на старте — эталон для проверки баланса при расчёте.
    pub chips_in_play: Chips,
}

/// Старт новой раздачи:
/// - двигает кнопку на следующее место с фишками;
/// - постит блайнды (короткий стек — в олл-ин);
/// - раздаёт карманные карты;
/// - настраивает BettingState и current_actor.
///
/// Если блайнды оставили меньше двух игроков, способных ставить,
/// префлоп-торговли может не быть вовсе — вызывающий код обязан
/// проверить `betting_required` и при необходимости сразу звать
/// `advance_street` (карты доезжают до шоудауна без ставок).
pub fn start_hand<R: RandomSource>(
    table: &mut Table,
    rng: &mut R,
) -> Result<HandEngine, EngineError> {
    if table.hand_in_progress {
        return Err(EngineError::HandAlreadyInProgress);
    }
    if table.funded_count() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    table.board.clear();
    table.total_pot = Chips::ZERO;
    table.street = Street::Preflop;
    table.hand_number += 1;
    table.hand_in_progress = true;

    // Статусы на новую раздачу: пустой стек — Busted и мимо раздачи,
    // остальные — Active со сброшенной ставкой и без карт.
    for seat_opt in table.seats.iter_mut() {
        if let Some(p) = seat_opt {
            if p.stack.is_zero() {
                p.status = PlayerStatus::Busted;
            } else {
                p.status = PlayerStatus::Active;
            }
            p.current_bet = Chips::ZERO;
            p.hole_cards.clear();
        }
    }

    let chips_in_play = total_table_chips(table);

    let dealer_seat = next_dealer(table).ok_or(EngineError::NotEnoughPlayers)?;
    table.dealer_button = Some(dealer_seat);

    let mut engine = HandEngine {
        hand_number: table.hand_number,
        deck,
        betting: BettingState::new(
            Street::Preflop,
            Chips::ZERO,
            table.stakes.big_blind,
            Vec::new(),
        ),
        pot: Pot::new(),
        side_pots: Vec::new(),
        current_actor: None,
        history: HandHistory::new(),
        chips_in_play,
    };

    engine.history.push(HandEventKind::HandStarted {
        hand_number: table.hand_number,
    });

    post_blinds(table, &mut engine, dealer_seat)?;
    deal_hole_cards(table, &mut engine)?;

    table.total_pot = engine.pot.total;

    Ok(engine)
}

/// Постинг блайндов и построение очереди префлопа.
fn post_blinds(
    table: &mut Table,
    engine: &mut HandEngine,
    dealer_seat: SeatIndex,
) -> Result<(), EngineError> {
    let stakes = table.stakes;
    let order = collect_seats_in_hand_from(table, dealer_seat);
    if order.len() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let sb_seat = order[1 % order.len()];
    let bb_seat = order[2 % order.len()];

    let sb_paid = post_one_blind(table, engine, sb_seat, stakes.small_blind)?;
    let bb_paid = post_one_blind(table, engine, bb_seat, stakes.big_blind)?;

    // Живая ставка раунда — полный BB, даже если его поставили в олл-ин
    // коротким стеком: остальные всё равно доплачивают до полного блайнда.
    engine.betting.current_bet = stakes.big_blind;
    engine.betting.last_aggressor = Some(bb_seat);

    engine.history.push(HandEventKind::BlindsPosted {
        dealer: dealer_seat,
        small_blind: (sb_seat, sb_paid),
        big_blind: (bb_seat, bb_paid),
    });

    // Первым на префлопе ходит сосед большого блайнда; сам BB стоит в
    // очереди последним и сохраняет право на рейз (option).
    let start = order
        .iter()
        .position(|&s| s == bb_seat)
        .map(|i| (i + 1) % order.len())
        .unwrap_or(0);

    let mut to_act = Vec::new();
    for i in 0..order.len() {
        let seat = order[(start + i) % order.len()];
        if table.player(seat).map(Player::can_act).unwrap_or(false) {
            to_act.push(seat);
        }
    }

    engine.current_actor = to_act.first().copied();
    engine.betting.to_act = to_act;

    Ok(())
}

/// Списать блайнд с места: не больше стека, пустой стек после — олл-ин.
fn post_one_blind(
    table: &mut Table,
    engine: &mut HandEngine,
    seat: SeatIndex,
    amount: Chips,
) -> Result<Chips, EngineError> {
    let player = table.player_mut(seat).ok_or(EngineError::EmptySeat)?;
    let paid = amount.min(player.stack);
    player.stack -= paid;
    player.current_bet += paid;
    if player.stack.is_zero() {
        player.status = PlayerStatus::AllIn;
    }
    engine.pot.add(seat, paid);
    Ok(paid)
}

/// Раздать по 2 карманные карты, по кругу от кнопки.
fn deal_hole_cards(table: &mut Table, engine: &mut HandEngine) -> Result<(), EngineError> {
    let dealer = table
        .dealer_button
        .ok_or(EngineError::Internal("кнопка не установлена"))?;
    let order = collect_seats_in_hand_from(table, dealer);

    for _ in 0..2 {
        for &seat in &order {
            let card = engine.deck.deal()?;
            if let Some(p) = table.player_mut(seat) {
                p.hole_cards.push(card);
            }
        }
    }

    for &seat in &order {
        if let Some(p) = table.player(seat) {
            engine.history.push(HandEventKind::HoleCardsDealt {
                seat,
                cards: p.hole_cards.clone(),
            });
        }
    }

    Ok(())
}

/// Нужна ли ещё торговля при текущей очереди: либо решение ждут двое и
/// больше, либо единственному в очереди есть что уравнивать. Одинокий
/// активный игрок против одних олл-инов при уравненных ставках не торгуется.
pub fn betting_required(table: &Table, betting: &BettingState) -> bool {
    match betting.to_act.len() {
        0 => false,
        1 => table
            .player(betting.to_act[0])
            .map(|p| p.current_bet < betting.current_bet)
            .unwrap_or(false),
        _ => true,
    }
}

/// Применить действие игрока. Валидация идёт до любых изменений:
/// отклонённое действие не трогает ни стол, ни банк, и ход остаётся
/// у того же игрока.
pub fn apply_action<E: HandEvaluator + ?Sized>(
    table: &mut Table,
    engine: &mut HandEngine,
    action: PlayerAction,
    evaluator: &E,
) -> Result<HandStatus, EngineError> {
    if !table.hand_in_progress {
        return Err(EngineError::NoActiveHand);
    }
    if action.seat as usize >= table.seats.len() {
        return Err(EngineError::InvalidSeat(action.seat));
    }

    let player_ref = table.player(action.seat).ok_or(EngineError::EmptySeat)?;
    if player_ref.player_id != action.player_id {
        return Err(EngineError::PlayerNotAtTable(action.player_id));
    }
    if engine.current_actor != Some(action.seat) {
        return Err(EngineError::NotPlayersTurn(action.player_id));
    }

    validate_action(player_ref, &action.kind, &engine.betting)?;

    let to_call = engine
        .betting
        .current_bet
        .saturating_sub(player_ref.current_bet);

    match action.kind {
        PlayerActionKind::Fold => {
            let player = table.player_mut(action.seat).ok_or(EngineError::EmptySeat)?;
            player.status = PlayerStatus::Folded;
        }

        PlayerActionKind::Check => {}

        PlayerActionKind::Call => {
            let player = table.player_mut(action.seat).ok_or(EngineError::EmptySeat)?;
            // Короткий колл: списываем не больше стека, игрок в олл-ине.
            let pay = to_call.min(player.stack);
            player.stack -= pay;
            player.current_bet += pay;
            if player.stack.is_zero() {
                player.status = PlayerStatus::AllIn;
            }
            engine.pot.add(action.seat, pay);
        }

        PlayerActionKind::Raise(target) => {
            let player = table.player_mut(action.seat).ok_or(EngineError::EmptySeat)?;
            let pay = target.saturating_sub(player.current_bet);
            player.stack -= pay;
            player.current_bet = target;
            if player.stack.is_zero() {
                player.status = PlayerStatus::AllIn;
            }
            engine.pot.add(action.seat, pay);

            // Рейз переоткрывает раунд: все остальные активные снова в очереди.
            let reopened = queue_after_raise(table, action.seat);
            engine.betting.on_raise(action.seat, target, reopened);
        }
    }

    let (player_id, new_stack) = {
        let p = table.player(action.seat).ok_or(EngineError::EmptySeat)?;
        (p.player_id, p.stack)
    };
    engine.history.push(HandEventKind::PlayerActed {
        player_id,
        seat: action.seat,
        action: action.kind,
        new_stack,
        pot_after: engine.pot.total,
    });

    table.total_pot = engine.pot.total;
    engine.betting.mark_acted(action.seat);

    // Остался один непас — банк его без вскрытия.
    if count_in_hand(table) == 1 {
        let summary = finish_hand_without_showdown(table, engine)?;
        return Ok(HandStatus::Finished(summary));
    }

    if engine.betting.is_round_complete() {
        advance_street(table, engine, evaluator)
    } else {
        engine.current_actor = engine.betting.to_act.first().copied();
        Ok(HandStatus::Ongoing)
    }
}

/// Очередь после рейза: все активные по кругу от соседа рейзера,
/// сам рейзер не включается.
fn queue_after_raise(table: &Table, raiser: SeatIndex) -> Vec<SeatIndex> {
    let order = collect_seats_in_hand_from(table, raiser);
    order
        .into_iter()
        .skip(1)
        .filter(|&seat| table.player(seat).map(Player::can_act).unwrap_or(false))
        .collect()
}

/// Сколько игроков ещё претендует на банк (Active + AllIn).
fn count_in_hand(table: &Table) -> usize {
    table
        .seats
        .iter()
        .filter_map(|s| s.as_ref())
        .filter(|p| p.is_in_hand())
        .count()
}

fn total_table_chips(table: &Table) -> Chips {
    table
        .seats
        .iter()
        .filter_map(|s| s.as_ref())
        .fold(Chips::ZERO, |acc, p| acc + p.stack)
}

/// Переход улиц после закрытия раунда. Если ставить больше некому
/// (все в олл-ине, кроме максимум одного), борд доезжает до ривера
/// без торговли и раздача уходит на шоудаун.
pub fn advance_street<E: HandEvaluator + ?Sized>(
    table: &mut Table,
    engine: &mut HandEngine,
    evaluator: &E,
) -> Result<HandStatus, EngineError> {
    loop {
        let (street, cards) = match table.street {
            Street::Preflop => (Street::Flop, 3),
            Street::Flop => (Street::Turn, 1),
            Street::Turn => (Street::River, 1),
            Street::River => {
                let summary = finish_hand_with_showdown(table, engine, evaluator)?;
                return Ok(HandStatus::Finished(summary));
            }
            Street::Showdown => {
                return Err(EngineError::Internal("advance после шоудауна"));
            }
        };

        deal_board_cards(table, engine, cards, street)?;
        start_betting_round(table, engine, street)?;

        if betting_required(table, &engine.betting) {
            engine.current_actor = engine.betting.to_act.first().copied();
            return Ok(HandStatus::Ongoing);
        }
        engine.current_actor = None;
    }
}

fn deal_board_cards(
    table: &mut Table,
    engine: &mut HandEngine,
    count: usize,
    street: Street,
) -> Result<(), EngineError> {
    let mut dealt = Vec::with_capacity(count);
    for _ in 0..count {
        let card = engine.deck.deal()?;
        table.board.push(card);
        dealt.push(card);
    }

    table.street = street;
    engine.history.push(HandEventKind::BoardDealt {
        street,
        cards: dealt,
    });
    engine.history.push(HandEventKind::StreetChanged { street });

    Ok(())
}

/// Новый раунд ставок: ставки за раунд обнуляются, очередь — активные
/// по кругу от соседа кнопки.
fn start_betting_round(
    table: &mut Table,
    engine: &mut HandEngine,
    street: Street,
) -> Result<(), EngineError> {
    for seat_opt in table.seats.iter_mut() {
        if let Some(p) = seat_opt {
            p.current_bet = Chips::ZERO;
        }
    }

    let dealer = table
        .dealer_button
        .ok_or(EngineError::Internal("кнопка не установлена"))?;
    let first = seat_after(table, dealer);

    let to_act: Vec<SeatIndex> = collect_seats_in_hand_from(table, first)
        .into_iter()
        .filter(|&seat| table.player(seat).map(Player::can_act).unwrap_or(false))
        .collect();

    engine.betting = BettingState::new(street, Chips::ZERO, table.stakes.big_blind, to_act);

    Ok(())
}

fn seat_after(table: &Table, seat: SeatIndex) -> SeatIndex {
    ((seat as usize + 1) % table.max_seats() as usize) as SeatIndex
}

/// Завершение без вскрытия: весь банк — единственному оставшемуся.
fn finish_hand_without_showdown(
    table: &mut Table,
    engine: &mut HandEngine,
) -> Result<HandSummary, EngineError> {
    let winner_seat = table
        .seats
        .iter()
        .enumerate()
        .find(|(_, s)| s.as_ref().map(|p| p.is_in_hand()).unwrap_or(false))
        .map(|(idx, _)| idx as SeatIndex)
        .ok_or(EngineError::Internal("нет претендентов на банк"))?;

    let street_reached = table.street;
    let total_pot = engine.pot.total;

    let mut results = prefill_results(table, &HashMap::new());

    let winner = table
        .player_mut(winner_seat)
        .ok_or(EngineError::EmptySeat)?;
    winner.stack += total_pot;
    let winner_id = winner.player_id;

    engine.history.push(HandEventKind::PotAwarded {
        seat: winner_seat,
        player_id: winner_id,
        amount: total_pot,
    });

    if let Some(r) = results.iter_mut().find(|r| r.player_id == winner_id) {
        r.won = total_pot;
        r.is_winner = true;
    }

    close_hand(table, engine)?;
    engine.history.push(HandEventKind::HandFinished {
        hand_number: engine.hand_number,
    });

    Ok(HandSummary {
        hand_number: engine.hand_number,
        street_reached,
        board: table.board.clone(),
        total_pot,
        results,
    })
}

/// Шоудаун: вскрытие, сайд-поты, делёж каждого слоя между лучшими руками.
fn finish_hand_with_showdown<E: HandEvaluator + ?Sized>(
    table: &mut Table,
    engine: &mut HandEngine,
    evaluator: &E,
) -> Result<HandSummary, EngineError> {
    table.street = Street::Showdown;

    let dealer = table
        .dealer_button
        .ok_or(EngineError::Internal("кнопка не установлена"))?;
    let reveal_order = collect_seats_in_hand_from(table, seat_after(table, dealer));

    // Каждую руку оцениваем один раз, вскрытие идёт по кругу от кнопки.
    let mut ranks: HashMap<SeatIndex, HandRank> = HashMap::new();
    for &seat in &reveal_order {
        let p = table.player(seat).ok_or(EngineError::EmptySeat)?;
        let rank = evaluator.evaluate(&p.hole_cards, &table.board);
        engine.history.push(HandEventKind::ShowdownReveal {
            seat,
            player_id: p.player_id,
            hole_cards: p.hole_cards.clone(),
            rank,
        });
        ranks.insert(seat, rank);
    }

    let side_pots = compute_side_pots(&engine.pot.contributions);
    engine.side_pots = side_pots.clone();

    let mut results = prefill_results(table, &ranks);
    let total_pot = engine.pot.total;

    for sp in &side_pots {
        if sp.amount.is_zero() {
            continue;
        }

        // Претенденты слоя — невскрывшиеся (fold) не участвуют. Если слой
        // состоит из одних сфолдивших вкладов, он уходит лучшим рукам стола.
        let mut candidates: Vec<SeatIndex> = sp
            .eligible_seats
            .iter()
            .copied()
            .filter(|s| ranks.contains_key(s))
            .collect();
        if candidates.is_empty() {
            candidates = reveal_order.clone();
        }

        let best = candidates
            .iter()
            .filter_map(|s| ranks.get(s))
            .max()
            .copied()
            .ok_or(EngineError::Internal("слой банка без претендентов"))?;

        let mut winners: Vec<SeatIndex> = candidates
            .into_iter()
            .filter(|s| ranks.get(s) == Some(&best))
            .collect();

        // При сплите нечётные фишки достаются ближайшим к кнопке по часовой.
        winners.sort_by_key(|&s| clockwise_distance(table, dealer, s));

        let share = Chips(sp.amount.0 / winners.len() as u64);
        let mut remainder = sp.amount.0 % winners.len() as u64;

        for &seat in &winners {
            let mut prize = share;
            if remainder > 0 {
                prize.0 += 1;
                remainder -= 1;
            }

            let p = table.player_mut(seat).ok_or(EngineError::EmptySeat)?;
            p.stack += prize;
            let player_id = p.player_id;

            engine.history.push(HandEventKind::PotAwarded {
                seat,
                player_id,
                amount: prize,
            });

            if let Some(r) = results.iter_mut().find(|r| r.player_id == player_id) {
                r.won += prize;
                r.is_winner = true;
            }
        }
    }

    close_hand(table, engine)?;
    engine.history.push(HandEventKind::HandFinished {
        hand_number: engine.hand_number,
    });

    Ok(HandSummary {
        hand_number: engine.hand_number,
        street_reached: Street::Showdown,
        board: table.board.clone(),
        total_pot,
        results,
    })
}

/// Прервать раздачу снаружи: единственному оставшемуся банк уходит целиком,
/// иначе раздача аннулируется и каждый получает свои вклады обратно.
pub fn abort_hand(table: &mut Table, engine: &mut HandEngine) -> Result<HandSummary, EngineError> {
    if !table.hand_in_progress {
        return Err(EngineError::NoActiveHand);
    }

    let street_reached = table.street;
    let total_pot = engine.pot.total;
    let mut results = prefill_results(table, &HashMap::new());

    let in_hand: Vec<SeatIndex> = table
        .seats
        .iter()
        .enumerate()
        .filter(|(_, s)| s.as_ref().map(|p| p.is_in_hand()).unwrap_or(false))
        .map(|(idx, _)| idx as SeatIndex)
        .collect();

    if in_hand.len() == 1 {
        let seat = in_hand[0];
        let p = table.player_mut(seat).ok_or(EngineError::EmptySeat)?;
        p.stack += total_pot;
        let player_id = p.player_id;
        engine.history.push(HandEventKind::PotAwarded {
            seat,
            player_id,
            amount: total_pot,
        });
        if let Some(r) = results.iter_mut().find(|r| r.player_id == player_id) {
            r.won = total_pot;
            r.is_winner = true;
        }
    } else {
        // Аннулирование: вклады возвращаются по местам.
        let refunds: Vec<(SeatIndex, Chips)> = engine
            .pot
            .contributions
            .iter()
            .map(|(seat, chips)| (*seat, *chips))
            .collect();
        for (seat, amount) in refunds {
            if let Some(p) = table.player_mut(seat) {
                p.stack += amount;
                if let Some(r) = results.iter_mut().find(|r| r.player_id == p.player_id) {
                    r.won = amount;
                }
            }
        }
    }

    close_hand(table, engine)?;
    engine.history.push(HandEventKind::HandAborted {
        hand_number: engine.hand_number,
    });

    Ok(HandSummary {
        hand_number: engine.hand_number,
        street_reached,
        board: table.board.clone(),
        total_pot,
        results,
    })
}

/// Заготовки результатов по всем участникам раздачи (кому сдавались карты).
fn prefill_results(
    table: &Table,
    ranks: &HashMap<SeatIndex, HandRank>,
) -> Vec<PlayerHandResult> {
    table
        .seats
        .iter()
        .enumerate()
        .filter_map(|(idx, s)| s.as_ref().map(|p| (idx as SeatIndex, p)))
        .filter(|(_, p)| p.hole_cards.len() == 2)
        .map(|(seat, p)| PlayerHandResult {
            player_id: p.player_id,
            rank: ranks.get(&seat).copied(),
            won: Chips::ZERO,
            is_winner: false,
        })
        .collect()
}

/// Дистанция по часовой от соседа кнопки (у самого соседа — 0).
fn clockwise_distance(table: &Table, dealer: SeatIndex, seat: SeatIndex) -> usize {
    let max = table.max_seats() as usize;
    (seat as usize + max - dealer as usize - 1) % max
}

/// Закрытие раздачи: банк распределён, статусы и инварианты — финальные.
fn close_hand(table: &mut Table, engine: &mut HandEngine) -> Result<(), EngineError> {
    table.hand_in_progress = false;
    table.total_pot = Chips::ZERO;
    engine.current_actor = None;

    for seat_opt in table.seats.iter_mut() {
        if let Some(p) = seat_opt {
            if p.stack.is_zero() {
                p.status = PlayerStatus::Busted;
            }
        }
    }

    let actual = total_table_chips(table);
    if actual != engine.chips_in_play {
        return Err(EngineError::ConservationViolation {
            expected: engine.chips_in_play,
            actual,
        });
    }

    Ok(())
}
