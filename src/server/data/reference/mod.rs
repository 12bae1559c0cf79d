//! Repositories for the static reference catalog: cities, stations and trains.

pub mod city;
pub mod station;
pub mod train;
