//! Writes both fixture files with the default record count into the working directory.
//! can be run with `cargo run --example generator`

use std::error::Error;

use catsounds::{generate_array_json, generate_json_lines, Format, DEFAULT_COUNT};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    generate_array_json(Format::Array.default_file_name(), DEFAULT_COUNT)?;
    generate_json_lines(Format::Lines.default_file_name(), DEFAULT_COUNT)?;
    Ok(())
}
