pub mod care_gap;
pub mod composite;
pub mod risk_factors;
pub mod risk_score;
pub mod sepsis;
pub mod vitals;
