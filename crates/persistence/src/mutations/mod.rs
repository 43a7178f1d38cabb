// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence
//! layer. Most mutations use Diesel DSL, with minimal backend-specific
//! helpers (e.g., `last_insert_rowid()`) abstracted via the
//! `PersistenceBackend` trait.
//!
//! ## Module Organization
//!
//! - `attendance` — Member check-in registration
//! - `members` — Member seeding
//! - `purge` — Ledger reset
//! - `visitors` — Visitor registration with atomic check-in

pub mod attendance;
pub mod members;
pub mod purge;
pub mod visitors;
