use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bot::strength::hand_strength;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::engine::actions::PlayerActionKind;
use crate::engine::validation::LegalActions;

/// Срез видимого ботом состояния: свои карты, борд, банк и границы
/// легальных сумм. Чужие карманные карты сюда не попадают.
#[derive(Clone, Debug)]
pub struct BotView {
    pub hole_cards: Vec<Card>,
    pub board: Vec<Card>,
    pub pot: Chips,
    pub current_bet: Chips,
    pub big_blind: Chips,
    pub stack: Chips,
    pub legal: LegalActions,
}

/// Политика бота: по видимому состоянию выдать действие.
/// Контракт один — действие обязано входить в `legal`.
pub trait BotPolicy {
    fn decide(&mut self, view: &BotView) -> PlayerActionKind;
}

/// Пороговая политика: сила руки с небольшим случайным "настроением"
/// раскладывается по трём корзинам fold/call/raise.
#[derive(Clone, Debug)]
pub struct ThresholdPolicy {
    rng: StdRng,
}

impl ThresholdPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Целевая сумма рейза: floor(BB * 2 * (1 + strength * 3)),
    /// зажатая в легальное окно [min_raise_to, max_raise_to].
    fn raise_target(&self, strength: f64, view: &BotView) -> Chips {
        let raw = (view.big_blind.0 * 2) as f64 * (1.0 + strength * 3.0);
        let target = Chips(raw as u64);
        target
            .min(view.legal.max_raise_to)
            .max(view.legal.min_raise_to)
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Чего политика хочет до сверки с легальностью.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Desire {
    GiveUp,
    Match,
    Raise,
}

impl BotPolicy for ThresholdPolicy {
    fn decide(&mut self, view: &BotView) -> PlayerActionKind {
        let strength = hand_strength(&view.hole_cards);

        // Небольшой джиттер агрессии, чтобы бот не был детерминированной функцией руки.
        let aggression = 0.5 + self.rng.gen_range(-0.1..=0.1);
        let effective = strength * aggression;

        let desire = if effective < 0.3 {
            if self.rng.gen::<f64>() < 0.7 {
                Desire::GiveUp
            } else {
                Desire::Match
            }
        } else if effective < 0.6 {
            if self.rng.gen::<f64>() < 0.3 {
                Desire::GiveUp
            } else if self.rng.gen::<f64>() < 0.6 {
                Desire::Match
            } else {
                Desire::Raise
            }
        } else if self.rng.gen::<f64>() < 0.8 {
            Desire::Raise
        } else {
            Desire::Match
        };

        let legal = view.legal;

        match desire {
            // Бесплатно сдаваться незачем: чек вместо фолда, когда он есть.
            Desire::GiveUp => {
                if legal.can_check {
                    PlayerActionKind::Check
                } else {
                    PlayerActionKind::Fold
                }
            }
            Desire::Match => {
                if legal.can_call {
                    PlayerActionKind::Call
                } else if legal.can_check {
                    PlayerActionKind::Check
                } else {
                    PlayerActionKind::Fold
                }
            }
            Desire::Raise => {
                if legal.can_raise {
                    PlayerActionKind::Raise(self.raise_target(strength, view))
                } else if legal.can_call {
                    PlayerActionKind::Call
                } else if legal.can_check {
                    PlayerActionKind::Check
                } else {
                    PlayerActionKind::Fold
                }
            }
        }
    }
}
