// This file declares the existence of our command modules.

pub mod about;
pub mod blackjack;
pub mod eightball;
pub mod flip;
pub mod games;
pub mod help;
pub mod ping;
pub mod poker;
pub mod quote;
pub mod remind;
pub mod roulette;
pub mod setlocation;
pub mod setunit;
pub mod shutdown;
pub mod util;
pub mod weather;
