#![forbid(unsafe_code)]

//! Core domain model and business logic for Fitzer.
//!
//! This crate provides:
//! - Domain types (profile, assessment, exercises, diet selections)
//! - BMI classification
//! - The rule-based exercise recommender (analyze, select, customize)
//! - The budget diet planner
//! - Persistence (state store, weight log, CSV export)
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod rules;
pub mod bmi;
pub mod profile;
pub mod analyzer;
pub mod catalog;
pub mod selector;
pub mod customizer;
pub mod engine;
pub mod diet;
pub mod account;
pub mod store;
pub mod state;
pub mod weight_log;
pub mod weight_export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use bmi::{compute_bmi, BmiReading};
pub use profile::ProfileUpdate;
pub use analyzer::analyze_profile;
pub use catalog::{build_default_catalog, get_default_catalog, ExerciseCatalog};
pub use engine::{recommend_exercises, Recommendation};
pub use diet::{generate_budget_diet, BudgetDietPlan};
pub use account::UserAccount;
pub use store::{FileStore, MemoryStore, StateKey, StateStore, StoreLock};
pub use state::AppState;
pub use weight_log::{read_weight_history, JsonlWeightLog, WeightEntry, WeightSink};
pub use weight_export::export_weight_csv;
pub use config::Config;
