//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Request / response model (SearchRequest, SearchResponse)
//! - Relevance scoring (matcher)
//! - Path normalization and file classification
//! - Response rendering and sinks
//! - Error types

pub mod error;
pub mod matcher;
pub mod model;
pub mod paths;
pub mod render;
