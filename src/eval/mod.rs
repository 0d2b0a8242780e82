//! Оценка силы рук на шоудауне.
//!
//! Движку важен только интерфейс `HandEvaluator` — он сравнивает
//! готовые `HandRank`. В комплекте простая реализация `PairEvaluator`
//! (совпадения рангов + кикеры, без стритов и флешей).

pub mod evaluator;

pub use evaluator::{HandCategory, HandEvaluator, PairEvaluator};
