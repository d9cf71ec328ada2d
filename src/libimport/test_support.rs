//! Fixtures shared by the unit tests.

use log::{Level, LevelFilter, Log, Metadata, Record};
use rusqlite::Connection;
use rust_xlsxwriter::Workbook;
use std::cell::RefCell;
use std::path::Path;
use std::sync::Once;

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Keeps each record on the thread that logged it, so parallel tests don't mix.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|c| {
            c.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT_LOGGER: Once = Once::new();

/// Starts capturing log records emitted by the current thread.
pub(crate) fn capture_logs() {
    INIT_LOGGER.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
}

pub(crate) fn captured_logs() -> Vec<(Level, String)> {
    CAPTURED.with(|c| c.borrow_mut().drain(..).collect())
}

pub(crate) enum Cell<'a> {
    Text(&'a str),
    Num(f64),
    Blank,
}

pub(crate) fn write_sheet(path: &Path, headers: &[&str], rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (idx, row) in rows.iter().enumerate() {
        let r = idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let c = col as u16;
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(r, c, *s).unwrap();
                }
                Cell::Num(n) => {
                    worksheet.write_number(r, c, *n).unwrap();
                }
                Cell::Blank => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

/// The table as the quiz server defines it; the importer itself never creates it.
pub(crate) fn create_questions_db(path: &Path, extra_constraint: &str) -> Connection {
    let conn = Connection::open(path).unwrap();
    conn.execute(
        &format!(
            "CREATE TABLE Questions (
              id INTEGER PRIMARY KEY AUTOINCREMENT,
              typeQuestion TEXT NOT NULL,
              question TEXT NOT NULL,
              typeReponse TEXT NOT NULL,
              reponse TEXT NOT NULL,
              correction TEXT NOT NULL,
              image_data BLOB{extra_constraint}
            )"
        ),
        (),
    )
    .unwrap();
    conn
}
