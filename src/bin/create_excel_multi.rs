//! Writes `src/test/resources/test_multi.xlsx` relative to the working directory

use sheetfixtures::{fixtures, logging};

fn main() -> sheetfixtures::Result<()> {
    logging::init();
    fixtures::generate_multi_sheet(".")?;
    Ok(())
}
