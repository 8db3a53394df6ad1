//! Application layer - configuration, form handling and report rendering

pub mod config;
pub mod form;
pub mod report;
