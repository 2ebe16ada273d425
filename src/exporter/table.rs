// ==========================================
// Teaching Claim - Output tables
// ==========================================
// Records → header + string rows, in presentation column order.
// Column order is a presentation concern only; the engine never sees it.
// ==========================================

use crate::domain::{ExpandedRecord, MatchedRecord, TimetableRecord};
use crate::importer::columns;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

const TIMETABLE_HEADERS: &[&str] = &[
    columns::EMAIL,
    columns::NAME,
    columns::CLASS_SECTION,
    columns::CATALOG_NBR,
    columns::DAY,
    columns::START_TIME,
    columns::END_TIME,
];

const MATCHED_HEADERS: &[&str] = &[
    columns::EMPL_ID,
    columns::FULL_LEGAL_NAME,
    columns::TIME_ENTRY_CODE,
    columns::DATE,
    columns::START_TIME,
    columns::END_TIME,
    columns::POSITION_ID,
    columns::PROGRAM_ID,
    columns::COMMENT,
    columns::DAY,
    columns::CATALOG_NBR,
    columns::NAME,
    columns::CLASS_SECTION,
];

const EXPANDED_HEADERS: &[&str] = &[
    columns::EMPL_ID,
    columns::FULL_LEGAL_NAME,
    columns::NAME,
    columns::TIME_ENTRY_CODE,
    columns::DAY,
    columns::DATE,
    columns::WEEK_NUMBER,
    columns::START_TIME,
    columns::END_TIME,
    columns::POSITION_ID,
    columns::PROGRAM_ID,
    columns::CLASS_SECTION,
    columns::CATALOG_NBR,
    columns::COMMENT,
];

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Filtered or unmatched timetable rows: core columns, then passthrough columns.
pub fn timetable_table(records: &[TimetableRecord]) -> Table {
    let extra: BTreeSet<&String> = records.iter().flat_map(|r| r.passthrough.keys()).collect();

    let mut header_row = headers(TIMETABLE_HEADERS);
    header_row.extend(extra.iter().map(|h| h.to_string()));

    let rows = records
        .iter()
        .map(|r| {
            let mut row = vec![
                text(&r.email),
                text(&r.name),
                text(&r.class_section),
                text(&r.catalog_nbr),
                text(&r.day),
                text(&r.start_time),
                text(&r.end_time),
            ];
            row.extend(
                extra
                    .iter()
                    .map(|h| r.passthrough.get(*h).cloned().unwrap_or_default()),
            );
            row
        })
        .collect();

    Table {
        headers: header_row,
        rows,
    }
}

/// Merged rows; the Date column stays blank until expansion.
pub fn matched_table(records: &[MatchedRecord]) -> Table {
    let rows = records
        .iter()
        .map(|r| {
            vec![
                text(&r.empl_id),
                text(&r.full_legal_name),
                text(&r.time_entry_code),
                String::new(),
                text(&r.start_time),
                text(&r.end_time),
                text(&r.position_id),
                text(&r.program_id),
                text(&r.comment),
                text(&r.day),
                text(&r.catalog_nbr),
                text(&r.name),
                text(&r.class_section),
            ]
        })
        .collect();

    Table {
        headers: headers(MATCHED_HEADERS),
        rows,
    }
}

/// The attendance roster.
pub fn expanded_table(records: &[ExpandedRecord]) -> Table {
    let rows = records
        .iter()
        .map(|r| {
            vec![
                text(&r.empl_id),
                text(&r.full_legal_name),
                text(&r.name),
                text(&r.time_entry_code),
                r.day.to_string(),
                r.date.format("%Y-%m-%d").to_string(),
                r.week_label(),
                text(&r.start_time),
                text(&r.end_time),
                text(&r.position_id),
                text(&r.program_id),
                text(&r.class_section),
                text(&r.catalog_nbr),
                r.comment.clone(),
            ]
        })
        .collect();

    Table {
        headers: headers(EXPANDED_HEADERS),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Weekday;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    #[test]
    fn test_timetable_table_unions_passthrough_columns() {
        let mut first = BTreeMap::new();
        first.insert("Facility".to_string(), "B1".to_string());
        let mut second = BTreeMap::new();
        second.insert("Career".to_string(), "UGRD".to_string());

        let records = vec![
            TimetableRecord {
                email: Some("a@adj.np.edu.sg".to_string()),
                passthrough: first,
                ..Default::default()
            },
            TimetableRecord {
                passthrough: second,
                ..Default::default()
            },
        ];

        let table = timetable_table(&records);
        assert_eq!(&table.headers[7..], &["Career".to_string(), "Facility".to_string()]);
        assert_eq!(table.rows[0][0], "a@adj.np.edu.sg");
        assert_eq!(&table.rows[0][7..], &["".to_string(), "B1".to_string()]);
        assert_eq!(&table.rows[1][7..], &["UGRD".to_string(), "".to_string()]);
    }

    #[test]
    fn test_expanded_table_places_date_and_week_after_day() {
        let record = ExpandedRecord {
            empl_id: Some("E1".to_string()),
            full_legal_name: Some("TAN LIM JOHN".to_string()),
            name: None,
            time_entry_code: None,
            day: Weekday::Wed,
            date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
            week_number: 2,
            start_time: Some("09:00:00".to_string()),
            end_time: None,
            position_id: None,
            program_id: None,
            class_section: Some("DA".to_string()),
            catalog_nbr: Some("CS101".to_string()),
            comment: "WEEK 2_WED_CS101_DA_TAN LIM JOHN".to_string(),
        };

        let table = expanded_table(&[record]);
        let day_idx = table.headers.iter().position(|h| h == "Day").unwrap();
        assert_eq!(table.headers[day_idx + 1], "Date");
        assert_eq!(table.headers[day_idx + 2], "Week Number");
        assert_eq!(table.rows[0][day_idx], "Wed");
        assert_eq!(table.rows[0][day_idx + 1], "2024-04-10");
        assert_eq!(table.rows[0][day_idx + 2], "Week 2");
    }

    #[test]
    fn test_matched_table_leaves_date_blank() {
        let table = matched_table(&[MatchedRecord {
            empl_id: Some("E1".to_string()),
            ..Default::default()
        }]);
        assert_eq!(table.headers[3], "Date");
        assert_eq!(table.rows[0][3], "");
        assert_eq!(table.rows[0].len(), table.headers.len());
    }
}
