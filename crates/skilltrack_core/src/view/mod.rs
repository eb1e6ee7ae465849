//! Per-screen view models.
//!
//! # Responsibility
//! - Compose aggregator output into immutable Home/Goals/Skills snapshots.
//!
//! # Invariants
//! - Assembly performs no I/O and keeps no state between calls.
//! - A missing quote or an unknown skill level never fails a snapshot.

pub mod assembler;

pub use assembler::{
    CategorySection, GoalCard, GoalsViewModel, HomeViewModel, MonthSection, SkillCard,
    SkillsViewModel, ViewModelAssembler, YearSection,
};
