//! Writes the single-sheet parser samples (normal, offset header, mixed data)
//! into an existing `src/test/resources` directory

use sheetfixtures::{fixtures, logging};

fn main() -> sheetfixtures::Result<()> {
    logging::init();
    let written = fixtures::generate_each(".", &fixtures::samples())?;
    tracing::info!(count = written.len(), "test Excel files created");
    Ok(())
}
