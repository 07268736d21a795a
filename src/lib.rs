/// Basic application code
pub mod app;
/// REST clients for outside services
pub mod client;
/// Controllers for trigger endpoints
pub mod controller;
/// Domain objects
pub mod domain;
/// Notification message formatting
pub mod notification;
/// Runtime-resolved notification parameters
pub mod params;
/// Application settings
pub mod settings;
/// Application telemetry for tracing and logging
pub mod telemetry;
