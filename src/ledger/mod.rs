//! Ledger deserialization
//!
//! Turns loaded string batches into typed rows: the revenue ledger into
//! [`crate::models::TransactionRow`]s (the row normalizer) and the pharmacy
//! ledger into [`crate::models::PharmacyRow`]s.

pub mod pharmacy;
pub mod revenue;
