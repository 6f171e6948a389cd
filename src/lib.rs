//! Feedback Forms - form builder, response collection and AI-assisted analysis
//!
//! Authors define forms of typed questions, respondents submit answers,
//! and the crate aggregates those answers per question and asks a
//! generative model for a narrative summary. Forms and responses persist
//! as two JSON collections in a key-value backend.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
