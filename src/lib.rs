//! Quickcart - E-commerce Checkout Backend
//!
//! This crate implements a two-phase start/confirm checkout flow
//! against a simulated card-payment gateway, with stock decrement and
//! delivery-record creation on the success path.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
