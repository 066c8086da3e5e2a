//! Rules module for [The Resistance: Avalon](https://en.wikipedia.org/wiki/The_Resistance_(game)#Avalon).
//!
//! This crate decides who holds which secret role and what each role is allowed to learn about the others.
//! Turn sequencing, voting and persistence are left to the host engine, which calls into `game::GameRules`.

#![deny(missing_docs)]
#![warn(trivial_casts)]
#![deny(unused_extern_crates, unused_import_braces)]

pub mod error;
pub mod game;
mod util;

pub use crate::{
    error::{RuleSetError, RulesError},
    game::{Avalon, GameRules}
};
