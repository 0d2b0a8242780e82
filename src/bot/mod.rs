//! Решения ботов. Движку бот отдаёт обычное действие игрока;
//! "подумать секунду" перед ходом — забота слоя отображения, не движка.

pub mod policy;
pub mod strength;

pub use policy::{BotPolicy, BotView, ThresholdPolicy};
pub use strength::hand_strength;
