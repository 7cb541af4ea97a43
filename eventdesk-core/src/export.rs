//! CSV export of the event list.
//!
//! One header row, then one row per event in store order. Fields are only
//! quoted when they contain a delimiter, a quote or a line break.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::{EventDeskError, EventDeskResult};
use crate::event::Event;

/// Column headers, in export order.
pub const HEADER: [&str; 7] = [
    "Name",
    "Date",
    "Time",
    "Location",
    "Attendees",
    "Category",
    "Description",
];

/// Write the header and every event to `writer`.
///
/// Returns the number of event rows written.
pub fn write_csv<W: io::Write>(events: &[Event], writer: W) -> csv::Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;

    for event in events {
        let attendees = event.attendees.to_string();
        csv_writer.write_record([
            event.name.as_str(),
            event.date.as_str(),
            event.time.as_str(),
            event.location.as_str(),
            attendees.as_str(),
            event.category.as_str(),
            event.description.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(events.len())
}

/// Export every event to a CSV file at `path`, replacing any existing file.
pub fn export_to_path(events: &[Event], path: &Path) -> EventDeskResult<usize> {
    let write_failure = |reason: String| EventDeskError::WriteFailure {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::create(path).map_err(|e| write_failure(e.to_string()))?;
    let rows = write_csv(events, io::BufWriter::new(file)).map_err(|e| write_failure(e.to_string()))?;

    info!(path = %path.display(), rows, "events exported");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;

    fn make_event(name: &str, attendees: i64, description: &str) -> Event {
        Event {
            name: name.to_string(),
            date: "2025-06-01".to_string(),
            time: "18:00".to_string(),
            location: "Hall A".to_string(),
            attendees,
            category: Category::Meetup,
            description: description.to_string(),
        }
    }

    fn export_string(events: &[Event]) -> String {
        let mut buf = Vec::new();
        write_csv(events, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn read_rows(data: &str) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(data.as_bytes())
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn empty_store_exports_header_only() {
        assert_eq!(
            export_string(&[]),
            "Name,Date,Time,Location,Attendees,Category,Description\r\n"
        );
    }

    #[test]
    fn rows_follow_column_order() {
        let out = export_string(&[make_event("Launch", 42, "")]);
        let mut lines = out.split("\r\n");
        lines.next();
        assert_eq!(
            lines.next(),
            Some("Launch,2025-06-01,18:00,Hall A,42,Meetup,")
        );
    }

    #[test]
    fn one_row_per_event_in_store_order() {
        let events = vec![
            make_event("First", 1, ""),
            make_event("Second", 2, "two"),
            make_event("Third", -3, "three"),
        ];
        let rows = read_rows(&export_string(&events));

        assert_eq!(rows.len(), events.len() + 1);
        assert_eq!(rows[0], HEADER);
        for (row, event) in rows[1..].iter().zip(&events) {
            assert_eq!(row[0], event.name);
            assert_eq!(row[4], event.attendees.to_string());
            assert_eq!(row[6], event.description);
        }
    }

    #[test]
    fn embedded_delimiters_are_quoted_and_read_back() {
        let event = make_event("Q&A, \"live\"", 5, "line one\nline two");
        let out = export_string(std::slice::from_ref(&event));
        assert!(out.contains("\"Q&A, \"\"live\"\"\""));

        let rows = read_rows(&out);
        assert_eq!(rows[1][0], event.name);
        assert_eq!(rows[1][6], event.description);
    }

    #[test]
    fn export_to_path_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.csv");

        let rows = export_to_path(&[make_event("Launch", 42, "")], &path).unwrap();
        assert_eq!(rows, 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read_rows(&content).len(), 2);
    }

    #[test]
    fn unwritable_destination_is_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("events.csv");

        let err = export_to_path(&[], &path).unwrap_err();
        match err {
            EventDeskError::WriteFailure { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected WriteFailure, got {other:?}"),
        }
    }
}
