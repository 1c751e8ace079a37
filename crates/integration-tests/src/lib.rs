//! Integration tests for Waypoint.
//!
//! The tests in `tests/` exercise the HTTP contract of a *running* server
//! against a real `PostgreSQL` database, so they are `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and the server
//! cargo run -p waypoint-server
//!
//! # Run the contract tests against it
//! WAYPOINT_BASE_URL=http://localhost:3000 \
//! WAYPOINT_ADMIN_TOKEN=... \
//! cargo test -p waypoint-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `widget_api` - the embeddable widget's API contract (config, submit,
//!   script, item detail)
//! - `admin_api` - staff settings management and the vote/user resources

#![cfg_attr(not(test), forbid(unsafe_code))]
