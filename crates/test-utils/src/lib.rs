//! Shared git fixtures: temporary repositories with fixed commit dates and a bare remote

pub mod git_test_utils;
