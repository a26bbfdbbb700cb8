pub mod checklist;
pub mod config;
pub mod content;
pub mod error;
pub mod survey;
pub mod telemetry;
