pub mod confirm_gate;
pub mod editor_service;
pub mod export_service;
