use std::fs;

use log::{error, info, warn};

use kana_gen_core::io;
use kana_gen_core::model::corpus;
use kana_gen_core::model::generation_input::GenerationInput;
use kana_gen_core::model::unit_table::UnitTable;

mod config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional first argument: path to a JSON config file
    let config_path = std::env::args().nth(1);
    let config = config::load_config(config_path.as_deref());

    let table = match UnitTable::from_dir(&config.unit_dir) {
        Ok(table) => table,
        Err(e) => {
            error!("Failed to load unit files from {}: {}", config.unit_dir, e);
            return;
        }
    };
    if table.is_empty() {
        error!("No units found. Check the {} folder.", config.unit_dir);
        return;
    }

    info!("Got {} units", table.len());
    info!("Generating {} words...", config.word_count);

    let mut input = GenerationInput::new(config.word_length);
    input.set_starts_with(&config.starts_with);
    input.set_ends_with(&config.ends_with);
    input.set_prohibited_starts(&config.prohibited_starts);

    let attempt_ceiling = config.word_count.saturating_mul(config.attempt_factor);
    let result = corpus::build_with_progress(
        &table,
        &input,
        config.word_count,
        attempt_ceiling,
        |count| info!("Got {} words so far...", count),
    );

    let corpus = match result {
        Ok(corpus) => corpus,
        Err(e) => {
            error!("Generation failed: {}", e);
            return;
        }
    };

    if corpus.ceiling_reached {
        warn!(
            "Hit the attempt limit. Generated {} words.",
            corpus.words.len()
        );
    }

    let output_path = io::next_available_path(".", &config.output_stem);
    let lines: Vec<String> = corpus.words.iter().map(ToString::to_string).collect();

    match fs::write(&output_path, lines.join("\n")) {
        Ok(()) => info!(
            "Done! Generated {} words in {}",
            corpus.words.len(),
            output_path.display()
        ),
        Err(e) => error!("Failed to save the file: {}", e),
    }
}
