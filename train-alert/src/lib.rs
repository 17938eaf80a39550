//! Train departure alert.
//!
//! A one-shot checker that answers: "is my train on time, delayed,
//! or cancelled?" and pushes the verdict to a Telegram chat.

pub mod config;
pub mod domain;
pub mod monitor;
pub mod navitia;
pub mod telegram;
