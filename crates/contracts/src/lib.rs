//! Shared contracts for the ZATCA Phase 2 e-invoicing dashboard
//!
//! UI-agnostic types consumed by the dashboard screens: the form
//! validation engine, shared regex patterns, and the DTOs plus per-screen
//! rule sets for company profiles, customers, invoices and users.

pub mod domain;
pub mod shared;
pub mod system;
