//! Integration tests for chat-relay
//!
//! These tests drive the public API the way an application would.

pub mod cache_tests;
pub mod config_tests;
pub mod provider_tests;
pub mod router_tests;
