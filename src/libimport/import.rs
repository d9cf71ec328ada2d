use crate::libimport::error::Error;
use crate::libimport::image::{self, ImageLookup};
use crate::libimport::question::{cols, Question};
use crate::libimport::tableau;
use colored::Colorize;
use log::{debug, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub with_image: usize,
    pub missing_image: usize,
}

/// Inserts every row of the sheet into `Questions` inside one transaction.
///
/// Nothing is committed unless every row went in: an error returns before
/// `commit` and the dropped transaction rolls back.
pub fn import(
    connection: &mut Connection,
    sheet: &Path,
    image_dir: &Path,
) -> Result<ImportSummary, Error> {
    let now = Instant::now();
    let rows = tableau::load_sheet(sheet, &cols::REQUIRED)?;
    info!(
        "{}",
        format!("[Import] Importing {} questions from {:?}", rows.len(), sheet).blue()
    );

    let mut summary = ImportSummary::default();
    let tx = connection.transaction()?;
    for row in &rows {
        let numero = row.get(cols::NUMERO);
        let mut question = Question::from_sheet_row(row);
        info!(
            "{}",
            format!("├ Traitement de la question {}: {}", numero, question.question).green()
        );

        let lookup = image::resolve(image_dir, numero, row.get(cols::IMAGE))?;
        match &lookup {
            ImageLookup::Found { path, .. } => {
                debug!("[Import] Attaching {:?}", path);
                summary.with_image += 1;
            }
            ImageLookup::Missing { path } => {
                debug!("[Import] Question {} inserted without {:?}", numero, path);
                summary.missing_image += 1;
            }
            ImageLookup::NotRequested => {}
        }
        question.image_data = lookup.into_data();

        Question::insert(&tx, &question)?;
        summary.inserted += 1;
    }
    tx.commit()?;

    debug!(
        "[Import] Committed {} rows in {} ms.",
        summary.inserted,
        now.elapsed().as_millis()
    );
    Ok(summary)
}
