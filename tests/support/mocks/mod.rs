// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod security;
pub mod store;
pub mod time;
pub mod util;

/* -------------------------------- 時刻 -------------------------------- */
pub use time::{TickingClock, fixed_now};

/* -------------------------------- セキュリティ -------------------------------- */
pub use security::{FakeTokenManager, INVALID_TOKEN, PlainPasswordHasher, token_for};

/* -------------------------------- ストア -------------------------------- */
pub use store::MemoryStore;

/* -------------------------------- ユーティリティ -------------------------------- */
pub use util::TitleSlug;
