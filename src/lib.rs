//! Pathlens: read-only analytics over materialized patient treatment
//! pathway trees.
//!
//! The store is a SQLite file produced by an upstream refresh batch. One
//! table holds the flat `(parents, ids, level)` encoding of the pathway
//! tree (organisation → directorate/indication → drug → drug sequence);
//! this crate filters that encoding while preserving tree shape, prunes
//! ancestors left childless by filtering, aggregates metrics across
//! organisations, and derives transition graphs, co-occurrence networks
//! and retention funnels for dashboard charts. It never writes to the
//! store.

pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod pathways;
