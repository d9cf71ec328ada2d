use crate::libimport::error::Error;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Image flag value meaning "this question has no image".
pub const NO_IMAGE: &str = "non";

#[derive(Debug, Clone, PartialEq)]
pub enum ImageLookup {
    NotRequested,
    Found { path: PathBuf, data: Vec<u8> },
    Missing { path: PathBuf },
}

impl ImageLookup {
    pub fn into_data(self) -> Option<Vec<u8>> {
        match self {
            ImageLookup::Found { data, .. } => Some(data),
            ImageLookup::NotRequested | ImageLookup::Missing { .. } => None,
        }
    }
}

pub fn image_file_name(numero: &str) -> String {
    format!("Question{}.png", numero)
}

pub fn wants_image(flag: &str) -> bool {
    flag.to_lowercase() != NO_IMAGE
}

pub fn resolve(image_dir: &Path, numero: &str, flag: &str) -> Result<ImageLookup, Error> {
    if !wants_image(flag) {
        debug!("[Image] Question {} has no image", numero);
        return Ok(ImageLookup::NotRequested);
    }

    let name = image_file_name(numero);
    let path = image_dir.join(&name);
    info!("[Image] Recherche de l'image : {}", path.display());

    if path.exists() {
        let data = fs::read(&path)?;
        info!("[Image] Image trouvée : {} ({} octets)", name, data.len());
        Ok(ImageLookup::Found { path, data })
    } else {
        warn!("[Image] Image non trouvée pour {}", name);
        Ok(ImageLookup::Missing { path })
    }
}
