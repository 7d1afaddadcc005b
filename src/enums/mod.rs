pub mod analysis_error;
pub mod banner_tone;
pub mod commands;
pub mod ignore_reason;
pub mod report_view;
pub mod scan_phase;
pub mod submit_outcome;
