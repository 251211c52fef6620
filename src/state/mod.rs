//! State management module
//!
//! This module holds everything the views read from:
//! - Catalog records and their loading (data.rs, catalog.rs)
//! - Filtering over closed categories (filter.rs)
//! - Routes and per-page state (page.rs)
//! - The project detail overlay (overlay.rs)
//! - The contact form (contact.rs)

pub mod catalog;
pub mod contact;
pub mod data;
pub mod filter;
pub mod overlay;
pub mod page;
