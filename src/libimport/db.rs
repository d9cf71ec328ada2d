use crate::libimport::question::Question;
use log::{debug, error, info};
use rusqlite::{params, Connection, OpenFlags, Result, Row};
use std::path::Path;
use std::time::Instant;

const INSERT_QUESTION: &str = "INSERT INTO \
    Questions(typeQuestion, question, typeReponse, reponse, correction, image_data) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

/// A row read back from `Questions`, with the key the database assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredQuestion {
    pub id: i64,
    pub question: Question,
}

impl Question {
    pub fn insert(connection: &Connection, src: &Question) -> Result<()> {
        let mut statement = connection.prepare_cached(INSERT_QUESTION)?;
        match statement.execute(params![
            src.type_question,
            src.question,
            src.type_reponse,
            src.reponse,
            src.correction,
            src.image_data,
        ]) {
            Ok(_) => {
                debug!(
                    "[DB] Inserted question '{}' ({})",
                    src.question,
                    if src.image_data.is_some() { "with image" } else { "no image" }
                );
                Ok(())
            }
            Err(err) => {
                error!("[DB] Error while inserting question '{}': {:?}", src.question, err);
                Err(err)
            }
        }
    }

    fn from_row(row: &Row) -> Result<StoredQuestion> {
        Ok(StoredQuestion {
            id: row.get(0)?,
            question: Question {
                type_question: row.get(1)?,
                question: row.get(2)?,
                type_reponse: row.get(3)?,
                reponse: row.get(4)?,
                correction: row.get(5)?,
                image_data: row.get(6)?,
            },
        })
    }

    pub fn get_all(connection: &Connection) -> Result<Vec<StoredQuestion>> {
        let mut statement = connection.prepare(
            "SELECT rowid, typeQuestion, question, typeReponse, reponse, correction, image_data \
            FROM Questions ORDER BY rowid",
        )?;
        let rows = statement.query_map([], |row| Self::from_row(row))?;

        rows.collect()
    }
}

/// Opens an existing database. The file is never created here: the
/// `Questions` table belongs to the quiz server.
pub(crate) fn open_db(src: &Path) -> Result<Connection> {
    let now = Instant::now();
    info!("[DB] Opening Database {:?}", src);
    let db = Connection::open_with_flags(
        src,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    debug!("[DB] Opening took {} ms.", now.elapsed().as_millis());
    Ok(db)
}

pub(crate) fn close_db(connection: Connection) -> Result<()> {
    info!("[DB] Closing Database");
    match connection.close() {
        Ok(_) => Ok(()),
        Err((conn, _)) => {
            error!("[DB] Cannot close connection. Retrying...");
            conn.close().map_err(|(_, err)| {
                error!("[DB] Cannot close connection: {}", err);
                err
            })
        }
    }
}
