//! Writes `src/test/resources/test.xlsx` relative to the working directory

use sheetfixtures::{fixtures, logging};

fn main() -> sheetfixtures::Result<()> {
    logging::init();
    fixtures::generate_single_sheet(".")?;
    Ok(())
}
