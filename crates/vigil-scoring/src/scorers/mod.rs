pub mod fall;
pub mod pressure_ulcer;
pub mod readmission;
