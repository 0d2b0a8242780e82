use crate::domain::card::Card;
use crate::domain::hand::HandRank;

/// Внешний интерфейс шоудауна: карманные карты + борд -> сила руки.
/// Движок только сравнивает полученные ранги; больше — сильнее.
pub trait HandEvaluator {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> HandRank;
}

/// Категория руки в упрощённой шкале по совпадениям рангов.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    FullHouse = 4,
    FourOfAKind = 5,
}

/// Схема кодирования (u32):
///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
/// Ранги идут от определяющих к кикерам; Rank 2..14 влезает в 4 бита.
fn pack_rank(category: HandCategory, ranks: [u8; 5]) -> HandRank {
    let mut value = (category as u32) << 20;
    for (i, r) in ranks.iter().enumerate() {
        value |= (*r as u32 & 0x0F) << (16 - 4 * i);
    }
    HandRank(value)
}

/// Достать категорию обратно из HandRank, закодированного PairEvaluator.
pub fn category_of(rank: HandRank) -> HandCategory {
    match (rank.0 >> 20) & 0x0F {
        1 => HandCategory::OnePair,
        2 => HandCategory::TwoPair,
        3 => HandCategory::ThreeOfAKind,
        4 => HandCategory::FullHouse,
        5 => HandCategory::FourOfAKind,
        _ => HandCategory::HighCard,
    }
}

/// Простейший оценщик: каре / фулл-хаус / сет / две пары / пара / старшая
/// карта, добитые кикерами. Стриты и флеши не распознаёт — это осознанное
/// упрощение, полноценный компаратор подключается реализацией трейта.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairEvaluator;

impl HandEvaluator for PairEvaluator {
    fn evaluate(&self, hole: &[Card], board: &[Card]) -> HandRank {
        let mut counts = [0u8; 15]; // индексы 2..=14
        for card in hole.iter().chain(board.iter()) {
            counts[card.rank.value() as usize] += 1;
        }

        // Группы (count, rank) от сильных к слабым: сперва количество, потом ранг.
        let mut groups: Vec<(u8, u8)> = (2u8..=14)
            .rev()
            .filter(|&r| counts[r as usize] > 0)
            .map(|r| (counts[r as usize], r))
            .collect();
        groups.sort_by(|a, b| b.cmp(a));

        if groups.is_empty() {
            return pack_rank(HandCategory::HighCard, [0; 5]);
        }

        let (top_count, top_rank) = groups[0];
        let second = groups.get(1).copied();

        match (top_count, second) {
            (4, _) => {
                let kicker = best_kickers(&groups, &[top_rank], 1);
                pack_rank(HandCategory::FourOfAKind, [top_rank, kicker[0], 0, 0, 0])
            }
            (3, Some((c2, r2))) if c2 >= 2 => {
                pack_rank(HandCategory::FullHouse, [top_rank, r2, 0, 0, 0])
            }
            (3, _) => {
                let k = best_kickers(&groups, &[top_rank], 2);
                pack_rank(HandCategory::ThreeOfAKind, [top_rank, k[0], k[1], 0, 0])
            }
            (2, Some((2, r2))) => {
                let k = best_kickers(&groups, &[top_rank, r2], 1);
                pack_rank(HandCategory::TwoPair, [top_rank, r2, k[0], 0, 0])
            }
            (2, _) => {
                let k = best_kickers(&groups, &[top_rank], 3);
                pack_rank(HandCategory::OnePair, [top_rank, k[0], k[1], k[2], 0])
            }
            _ => {
                let k = best_kickers(&groups, &[], 5);
                pack_rank(HandCategory::HighCard, [k[0], k[1], k[2], k[3], k[4]])
            }
        }
    }
}

/// Лучшие n кикеров: ранги по убыванию, исключая уже использованные.
fn best_kickers(groups: &[(u8, u8)], used: &[u8], n: usize) -> Vec<u8> {
    let mut kickers: Vec<u8> = groups
        .iter()
        .map(|(_, r)| *r)
        .filter(|r| !used.contains(r))
        .collect();
    kickers.sort_by(|a, b| b.cmp(a));
    kickers.resize(n, 0);
    kickers
}
