// ==========================================
// Test data builders
// ==========================================

use std::io::Write;
use std::path::{Path, PathBuf};
use teaching_claim::domain::{HiringRecord, TimetableRecord};

// ==========================================
// TimetableRecord builder
// ==========================================

pub struct TimetableBuilder {
    record: TimetableRecord,
}

impl TimetableBuilder {
    /// An adjunct row that passes the filter as-is.
    pub fn new(name: &str) -> Self {
        Self {
            record: TimetableRecord {
                email: Some("lecturer@adj.np.edu.sg".to_string()),
                class_section: Some("DA".to_string()),
                day: Some("Mon".to_string()),
                start_time: Some("09:00".to_string()),
                end_time: Some("11:00".to_string()),
                name: Some(name.to_string()),
                catalog_nbr: Some("CS101".to_string()),
                ..Default::default()
            },
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.record.email = Some(email.to_string());
        self
    }

    pub fn section(mut self, section: &str) -> Self {
        self.record.class_section = Some(section.to_string());
        self
    }

    pub fn day(mut self, day: &str) -> Self {
        self.record.day = Some(day.to_string());
        self
    }

    pub fn no_day(mut self) -> Self {
        self.record.day = None;
        self
    }

    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.record.start_time = Some(start.to_string());
        self.record.end_time = Some(end.to_string());
        self
    }

    pub fn catalog(mut self, catalog: &str) -> Self {
        self.record.catalog_nbr = Some(catalog.to_string());
        self
    }

    pub fn row_number(mut self, row_number: usize) -> Self {
        self.record.row_number = row_number;
        self
    }

    pub fn build(self) -> TimetableRecord {
        self.record
    }
}

// ==========================================
// HiringRecord builder
// ==========================================

pub struct HiringBuilder {
    record: HiringRecord,
}

impl HiringBuilder {
    pub fn new(empl_id: &str, full_legal_name: &str) -> Self {
        Self {
            record: HiringRecord {
                empl_id: Some(empl_id.to_string()),
                full_legal_name: Some(full_legal_name.to_string()),
                time_entry_code: Some("TEC01".to_string()),
                position_id: Some("POS001".to_string()),
                program_id: Some("P100".to_string()),
                requester_remarks: None,
                row_number: 0,
            },
        }
    }

    pub fn remarks(mut self, remarks: &str) -> Self {
        self.record.requester_remarks = Some(remarks.to_string());
        self
    }

    pub fn program_id(mut self, program_id: &str) -> Self {
        self.record.program_id = Some(program_id.to_string());
        self
    }

    pub fn build(self) -> HiringRecord {
        self.record
    }
}

// ==========================================
// CSV fixtures
// ==========================================

/// Writes `lines` to `<dir>/<name>` and returns the path.
pub fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}
