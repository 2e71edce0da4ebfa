//! ShopEase Core - Shared domain types.
//!
//! This crate provides the types shared by every ShopEase component:
//! - `storefront` - Cart state, cart context and sign-up form rules
//! - `cli` - Command-line driver for the storefront layer
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no network
//! clients, no global state. Products and users arrive from external
//! collaborators (catalog service, registration flow) and are modelled here
//! so every consumer agrees on their shape.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, emails, passwords, products and users

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
