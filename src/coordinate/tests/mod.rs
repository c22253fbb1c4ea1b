//! Unit tests for the coordinate module

mod grid_tests;
mod precision_tests;
