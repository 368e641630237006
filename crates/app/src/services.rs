//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic
//! parameters (constructor injection), keeping this layer decoupled from
//! concrete adapters.

pub mod baked_good_service;
pub mod bakery_service;
pub mod game_service;
pub mod review_service;
pub mod user_service;
