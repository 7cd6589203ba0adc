//! Writes the sample report `etc/report.xlsx` into an existing `etc`
//! directory

use sheetfixtures::{fixtures, logging};

fn main() -> sheetfixtures::Result<()> {
    logging::init();
    fixtures::generate_report_sample(".")?;
    Ok(())
}
