//! Woolstep Core - Shared types library.
//!
//! This crate provides common types used by the storefront sections:
//! - `storefront` - Server-rendered storefront and section previews
//! - `integration-tests` - Cross-crate tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shopify global IDs, prices, and section schema declarations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
