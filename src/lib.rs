//! # Dynamic Links load test
//!
//! Load test for a Dynamic Links URL shortening service, built with
//! [Goose](https://book.goose.rs/). The service mimics the Firebase Dynamic
//! Links REST API:
//!
//!  - `POST /v1/shortLinks` shortens a URL for the client identified by an
//!    API key;
//!  - `GET /v1/shortLinks/{short_url}` expands a short link back to the
//!    original URL;
//!  - `GET /{short_url}` redirects to the original URL.
//!
//! Each simulated user repeatedly shortens randomly generated URLs of the
//! form `https://example.com/<random>`, and occasionally expands or follows
//! links it created earlier. Users keep their own session state and share
//! nothing with each other.
//!
//! Pacing, concurrency, run time, and metrics aggregation are all delegated
//! to Goose and configured on its command line:
//!
//! ```bash
//! cargo run --release -- --host http://localhost:8000 -u 10 -r 2 -t 5m
//! ```
//!
//! Run with `--help` for the full list of Goose run-time options.

pub mod api;
pub mod common;
pub mod redirect;
