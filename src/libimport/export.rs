use crate::libimport::db::StoredQuestion;
use crate::libimport::error::Error;
use crate::libimport::image::image_file_name;
use crate::libimport::question::Question;
use log::{debug, info};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug)]
pub struct QuestionsJson {
    pub questions: Vec<QuestionJson>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionJson {
    pub id: i64,
    pub type_question: String,
    pub question: String,
    pub type_reponse: String,
    pub reponse: String,
    pub correction: String,
    pub image: Option<PathBuf>,
}

/// Writes every stored question to `json_path`; image blobs go to
/// `image_dir/Question{id}.png`. Returns the number of questions written.
pub fn export(connection: &Connection, json_path: &Path, image_dir: &Path) -> Result<usize, Error> {
    let stored = Question::get_all(connection)?;
    info!("[Export] Exporting {} questions to {:?}", stored.len(), json_path);

    let mut questions = Vec::with_capacity(stored.len());
    for StoredQuestion { id, question } in stored {
        let image = match question.image_data {
            Some(data) => {
                fs::create_dir_all(image_dir)?;
                let path = image_dir.join(image_file_name(&id.to_string()));
                fs::write(&path, &data)?;
                debug!("[Export] Wrote {:?} ({} bytes)", path, data.len());
                Some(path)
            }
            None => None,
        };
        questions.push(QuestionJson {
            id,
            type_question: question.type_question,
            question: question.question,
            type_reponse: question.type_reponse,
            reponse: question.reponse,
            correction: question.correction,
            image,
        });
    }

    let count = questions.len();
    let json = serde_json::to_string_pretty(&QuestionsJson { questions })?;
    fs::write(json_path, json)?;
    Ok(count)
}
