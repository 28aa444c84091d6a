#![warn(clippy::all, clippy::pedantic)]

pub mod highscore_tests;
pub mod integration_tests;
