//! Kennel Ledger - breeding lifecycle and pedigree engine for dog kennels.
//!
//! Tracks litters from heat through mating, pregnancy confirmation and
//! birth, writes every occurrence to a per-entity fact log, and derives
//! bounded pedigree trees and kinship from the sire/dam graph.
//!
//! Every operation is scoped to one breeder (tenant) and runs against an
//! [`EntityStore`](ports::EntityStore): the in-memory store for tests and
//! embedding, or PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
