//! Property test modules and shared strategies

mod copy_tests;
mod merge_tests;
mod resolve_tests;
mod strategies;
