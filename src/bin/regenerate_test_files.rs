//! Recreates every fixture workbook, creating `src/test/resources` first if it
//! is missing

use sheetfixtures::{fixtures, logging};

fn main() -> sheetfixtures::Result<()> {
    logging::init();
    tracing::info!("regenerating test Excel files");
    let written = fixtures::generate_all(".")?;
    tracing::info!(count = written.len(), "test Excel files regenerated");
    Ok(())
}
