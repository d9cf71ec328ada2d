use crate::libimport::tableau::SheetRow;

/// Spreadsheet headers, as typed in the question workbook.
pub mod cols {
    pub const NUMERO: &str = "Numero";
    pub const QUESTION: &str = "Question";
    pub const TYPE_QUESTION: &str = "Type de Question";
    pub const CORRECTION: &str = "Correction";
    pub const TYPE_REPONSE: &str = "Type_de _Réponse";
    pub const REPONSE: &str = "Reponse";
    pub const IMAGE: &str = "Image";

    pub const REQUIRED: [&str; 7] = [
        NUMERO,
        QUESTION,
        TYPE_QUESTION,
        CORRECTION,
        TYPE_REPONSE,
        REPONSE,
        IMAGE,
    ];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Question {
    pub type_question: String,
    pub question: String,
    pub type_reponse: String,
    pub reponse: String,
    pub correction: String,
    pub image_data: Option<Vec<u8>>,
}

impl Question {
    /// Text fields only; the image is resolved separately.
    pub fn from_sheet_row(row: &SheetRow) -> Question {
        Question {
            type_question: row.get(cols::TYPE_QUESTION).to_string(),
            question: row.get(cols::QUESTION).to_string(),
            type_reponse: row.get(cols::TYPE_REPONSE).to_string(),
            reponse: row.get(cols::REPONSE).to_string(),
            correction: row.get(cols::CORRECTION).to_string(),
            image_data: None,
        }
    }
}
