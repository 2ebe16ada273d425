// ==========================================
// Shared helpers for integration tests
// ==========================================

#![allow(dead_code)]

pub mod test_data_builder;

pub use test_data_builder::{write_csv, HiringBuilder, TimetableBuilder};

use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
