//! Lingosync Core - Domain logic and business rules
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain model** - `TranslationSet`, `NamespacedKey`, `DiffResult`, `ResolvedPartition`
//! - **Diff engine** - structural comparison of local and remote translation sets
//! - **Merge strategies** - named policies for the pull and sync merge rules
//! - **Port definitions** - Traits for adapters: `IRemoteStore`, `IConflictPrompter`
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure diff/merge logic with no I/O dependencies.
//! Ports define trait interfaces that the remote and CLI crates implement.
//! The engines in `lingosync-sync` orchestrate the domain through the ports.

pub mod config;
pub mod domain;
pub mod ports;
