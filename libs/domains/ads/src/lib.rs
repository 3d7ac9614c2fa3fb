//! Ads Domain
//!
//! This module provides a complete domain implementation for classified ads.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic, validation, ownership checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, filters
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_ads::{AdService, InMemoryAdRepository};
//! use timefmt::DateTimeFormatter;
//!
//! let repository = InMemoryAdRepository::new();
//! let service = AdService::new(repository, DateTimeFormatter::seconds());
//! ```

pub mod conversions;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{AdError, AdResult};
pub use handlers::{AdsApiDoc, AdsState};
pub use models::{Ad, AdFilter, AdPredicate, ChangeAdStatus, CreateAd, UpdateAd, NO_AUTHOR_FILTER};
pub use repository::{AdRepository, InMemoryAdRepository};
pub use service::AdService;
