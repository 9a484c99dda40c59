//! Shared firmware services for the syscon driver crates.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod logger;
