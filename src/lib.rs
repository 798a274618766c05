//! tg-mentions: participant and @mention reports over exported Telegram chat JSON, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
