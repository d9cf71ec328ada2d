use colored::Colorize;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
mod libimport;
use crate::libimport::db;
use crate::libimport::error::Error;
use crate::libimport::export::export;
use crate::libimport::import::import;

const DEFAULT_SHEET: &str = "TableauQuestions.xlsx";
const DEFAULT_IMAGES: &str = "./images";

#[derive(Parser, Debug)]
#[command(name = "Importateur (Maths à la Maison)")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, default_value = "info")]
    log_level: String,
    #[arg(short, long, value_name = "FILE", default_value = "mathsALaMaison.db")]
    db: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert every spreadsheet row into the Questions table
    Import {
        #[arg(default_value = DEFAULT_SHEET)]
        sheet: PathBuf,
        #[arg(short, long, value_name = "DIR", default_value = DEFAULT_IMAGES)]
        images: PathBuf,
    },
    /// Dump the Questions table to JSON, images to a directory
    Export {
        json: PathBuf,
        #[arg(short, long, value_name = "DIR", default_value = "./exported_images")]
        images: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level)).init();

    let mut conn = match db::open_db(&args.db) {
        Ok(c) => c,
        Err(e) => {
            error!("{}{}", "Unable to open Database: ".red(), e);
            std::process::exit(1);
        }
    };

    let command = args.command.unwrap_or(Commands::Import {
        sheet: PathBuf::from(DEFAULT_SHEET),
        images: PathBuf::from(DEFAULT_IMAGES),
    });

    let result: Result<(), Error> = match command {
        Commands::Import { sheet, images } => {
            info!(
                "{}",
                format!("Spreadsheet at {:?}, images in {:?}", sheet, images).cyan()
            );
            import(&mut conn, &sheet, &images).map(|summary| {
                info!(
                    "{}",
                    format!(
                        "{} questions inserted ({} with image, {} image(s) not found)",
                        summary.inserted, summary.with_image, summary.missing_image
                    )
                    .cyan()
                );
                println!("{}", "Insertion terminée.".bright_green());
            })
        }
        Commands::Export { json, images } => export(&conn, &json, &images).map(|count| {
            println!(
                "{}",
                format!("Exported {} questions to {:?}.", count, json).bright_green()
            );
        }),
    };

    let closed = db::close_db(conn);
    if let Err(e) = result {
        error!("{}", format!("{}!", e).red());
        std::process::exit(1);
    }
    if let Err(e) = closed {
        error!("{}{}", "Unable to close Database: ".red(), e);
        std::process::exit(1);
    }
}
