// src/core.rs
pub mod analyzer;
pub mod comparator;
pub mod config;
pub mod report;
pub mod scanner;
