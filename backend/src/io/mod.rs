//! # IO Layer
//!
//! Interfaces exposing the domain to the outside world. Only REST for now.

pub mod rest;
