pub mod exercise;
pub mod goal;
pub mod measurement;
pub mod workout;
