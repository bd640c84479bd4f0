//! Integration tests for path contents resolution


mod properties;
mod service_providers;
