//! # Artistly Engine
//!
//! Artistly is the filter/search/sort engine behind an artist discovery
//! gallery and its moderation dashboard. It is a **UI-agnostic library**:
//! whatever renders the pages only supplies records, calls mutators and reads
//! the derived result.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front-end (CLI, web, ...)                                  │
//! │  - Supplies the dataset, calls mutators, renders results    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs) / Views (view.rs)                     │
//! │  - One explicit state object per session                    │
//! │  - Mutators re-derive synchronously                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pipeline (pipeline.rs, filter.rs, sort.rs)                 │
//! │  - Pure: (records, criteria, sort key) → ordered result     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - RecordStore trait, InMemoryStore                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! Apart from [`dataset::Dataset::load`] and [`config::EngineConfig::load`],
//! nothing in this crate touches the filesystem, and nothing ever writes to
//! stdout or stderr. Diagnostics go through `tracing`.
//!
//! ## Example
//!
//! ```
//! use artistly::config::EngineConfig;
//! use artistly::criteria::MultiField;
//! use artistly::dataset::Dataset;
//! use artistly::session::Session;
//! use artistly::store::memory::InMemoryStore;
//!
//! let store = InMemoryStore::from_dataset(Dataset::sample()?)?;
//! let mut session = Session::new(store, &EngineConfig::default())?;
//!
//! session.gallery_mut().toggle_set_member(MultiField::Category, "DJs", true)?;
//! assert_eq!(session.gallery().results()[0].name, "Arjun Khanna");
//! # Ok::<(), artistly::error::ArtistlyError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`catalog`]: Published categories, locations, price tiers, languages
//! - [`model`]: `Artist`, `Submission` and their raw draft shapes
//! - [`criteria`]: Gallery and dashboard criteria with their mutators
//! - [`filter`]: Inclusion predicates
//! - [`sort`]: Total-order comparators
//! - [`pipeline`]: The `Criteria` trait and `derive`
//! - [`view`]: Stateful views that re-derive on every mutation
//! - [`session`]: Store + views + the submission write path
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`dataset`]: JSON dataset loading and the built-in sample
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod catalog;
pub mod config;
pub mod criteria;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod session;
pub mod sort;
pub mod store;
pub mod view;
