//! Sample scene assembly
//!
//! Client code exercising the builder: the city block written by the
//! `scenery` binary.

mod city;

pub use city::city_block;
