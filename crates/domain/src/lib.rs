//! # ludex-domain
//!
//! Pure domain model for the ludex review API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the five persisted record types: [`User`](user::User),
//!   [`Game`](game::Game), [`Review`](review::Review),
//!   [`Bakery`](bakery::Bakery), and [`BakedGood`](baked_good::BakedGood)
//! - Define draft (`New*`) types for records the database has not yet
//!   assigned an id to
//! - Define patch types carrying the explicit allow-list of fields a
//!   `PATCH` request may overwrite
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod baked_good;
pub mod bakery;
pub mod game;
pub mod review;
pub mod user;
