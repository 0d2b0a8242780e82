use holdem_sim::domain::card::Card;
use holdem_sim::eval::evaluator::category_of;
use holdem_sim::eval::{HandCategory, HandEvaluator, PairEvaluator};

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

fn cards(codes: &[&str]) -> Vec<Card> {
    codes.iter().map(|s| card(s)).collect()
}

#[test]
fn categories_are_ordered_by_strength() {
    let eval = PairEvaluator;
    let board = cards(&["2h", "7d", "9s", "Jc", "3d"]);

    let high_card = eval.evaluate(&cards(&["Ah", "Kd"]), &board);
    let pair = eval.evaluate(&cards(&["Jh", "Kd"]), &board);
    let two_pair = eval.evaluate(&cards(&["Jh", "9d"]), &board);
    let trips = eval.evaluate(&cards(&["Jh", "Jd"]), &board);

    assert!(pair > high_card);
    assert!(two_pair > pair);
    assert!(trips > two_pair);

    assert_eq!(category_of(high_card), HandCategory::HighCard);
    assert_eq!(category_of(pair), HandCategory::OnePair);
    assert_eq!(category_of(two_pair), HandCategory::TwoPair);
    assert_eq!(category_of(trips), HandCategory::ThreeOfAKind);
}

#[test]
fn full_house_and_quads_are_recognized() {
    let eval = PairEvaluator;

    let full = eval.evaluate(&cards(&["Ah", "Ad"]), &cards(&["As", "2h", "2d", "9c", "Jd"]));
    assert_eq!(category_of(full), HandCategory::FullHouse);

    let quads = eval.evaluate(&cards(&["Ah", "Ad"]), &cards(&["As", "Ac", "2d", "9c", "Jd"]));
    assert_eq!(category_of(quads), HandCategory::FourOfAKind);

    assert!(quads > full);
}

#[test]
fn higher_pair_beats_lower_pair() {
    let eval = PairEvaluator;
    let board = cards(&["2h", "7d", "9s", "Jc", "3d"]);

    let aces = eval.evaluate(&cards(&["Ah", "Ad"]), &board);
    let kings = eval.evaluate(&cards(&["Kh", "Kd"]), &board);
    let queens = eval.evaluate(&cards(&["Qh", "Qd"]), &board);

    assert!(aces > kings);
    assert!(kings > queens);
}

#[test]
fn kickers_break_ties_between_equal_pairs() {
    let eval = PairEvaluator;
    let board = cards(&["9h", "7d", "2s", "Jc", "3d"]);

    // Пара девяток у обоих, кикер A против K.
    let with_ace = eval.evaluate(&cards(&["9s", "Ad"]), &board);
    let with_king = eval.evaluate(&cards(&["9c", "Kd"]), &board);
    assert!(with_ace > with_king);
}

#[test]
fn identical_ranks_tie_exactly() {
    let eval = PairEvaluator;
    let board = cards(&["2h", "7d", "9s", "Jc", "3d"]);

    // Одинаковые по рангам руки в разных мастях равны — база для сплита.
    let a = eval.evaluate(&cards(&["Ah", "Kd"]), &board);
    let b = eval.evaluate(&cards(&["As", "Kc"]), &board);
    assert_eq!(a, b);
}

#[test]
fn two_pair_picks_best_two_of_three() {
    let eval = PairEvaluator;

    // Три пары в семи картах: играют J+9, кикер A.
    let rank = eval.evaluate(&cards(&["9h", "Jd"]), &cards(&["9s", "Jc", "2d", "2h", "Ad"]));
    assert_eq!(category_of(rank), HandCategory::TwoPair);

    let weaker = eval.evaluate(&cards(&["9h", "Jd"]), &cards(&["9s", "Jc", "2d", "2h", "Kd"]));
    assert!(rank > weaker);
}
