//! Woolstep storefront library.
//!
//! Server-rendered page-builder sections backed by the Shopify Storefront
//! API. This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod sections;
pub mod shopify;
pub mod state;
