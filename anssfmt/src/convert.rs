use std::fs::OpenOptions;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use anss::{format_entry, ColumnMap, BANNER, RULE};
use failure::{Error, ResultExt};
use log::{debug, info};

/// Convert the catalog CSV at `input` into a fixed-width report at `output`.
///
/// The input is opened first; if that fails the output file is never
/// created. Each handle is a scoped value released on its own exit path.
pub fn catalog_to_report(input: &Path, output: &Path) -> Result<(), Error> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(input)
        .context(format!("cannot open input <{}>", input.display()))?;

    let wtr = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(output)
        .context(format!(
            "cannot open output <{}> for writing",
            output.display()
        ))?;

    write_report(rdr, &mut BufWriter::new(wtr))
}

/// Write the banner and one formatted entry per catalog record.
///
/// Any record that fails to format aborts the whole run; entries written
/// before the failure stay in the output.
fn write_report<R: Read, W: Write>(mut rdr: csv::Reader<R>, wtr: &mut W) -> Result<(), Error> {
    wtr.write_all(BANNER.as_bytes())?;
    wtr.write_all(RULE.as_bytes())?;

    let cols = ColumnMap::from_header(rdr.headers()?);
    debug!("{:?}", &cols);

    let mut entries = 0usize;
    for (i, result) in rdr.records().enumerate() {
        // rows are numbered from 1 counting the header line
        let record = result.context(format!("reading row {}", i + 2))?;
        let entry = format_entry(&record, &cols).context(format!("formatting row {}", i + 2))?;
        wtr.write_all(entry.as_bytes())?;
        entries += 1;
    }
    wtr.flush()?;

    info!("wrote {} report entries", entries);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const STANDARD_HEADER: &str =
        "LAT,LONG,ORI_YEAR,ORI_MONTH,ORI_DAY,ORI_HOUR,ORI_MINUTE,ORI_SECOND,MAG,DEPTH";

    fn report_from(input: &str) -> Result<Vec<u8>, Error> {
        let rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(input.as_bytes());
        let mut out = Vec::new();
        write_report(rdr, &mut out).map(|_| out)
    }

    #[test]
    fn full_report_layout() {
        let input = format!(
            "{}\n34.05,-118.25,2020,3,5,14,22,9.1,4.5,10.2\n61.042,-147.73,1964,3,27,17,36,14,9.2,25\n",
            STANDARD_HEADER
        );
        let report = report_from(&input).unwrap();

        let expected = "Date       Time             Lat       Lon  Depth   Mag \n\
                        ------------------------------------------------------\n\
                        2020/03/05 14:22:09.10    34.05   -118.25   10.2   4.5\n\
                        1964/03/27 17:36:14.00   61.042   -147.73   25.0   9.2\n";
        assert_eq!(String::from_utf8(report).unwrap(), expected);
    }

    #[test]
    fn header_order_invariance() {
        let a = format!(
            "{}\n34.05,-118.25,2020,3,5,14,22,9.1,4.5,10.2\n",
            STANDARD_HEADER
        );
        let b = "DEPTH,MAG,ORI_SECOND,ORI_MINUTE,ORI_HOUR,ORI_DAY,ORI_MONTH,ORI_YEAR,LONG,LAT\n\
                 10.2,4.5,9.1,22,14,5,3,2020,-118.25,34.05\n";

        assert_eq!(report_from(&a).unwrap(), report_from(b).unwrap());
    }

    #[test]
    fn malformed_row_aborts_but_keeps_earlier_entries() {
        let input = format!(
            "{}\n34.05,-118.25,2020,3,5,14,22,9.1,4.5,10.2\nbogus,-118.25,2020,3,5,14,22,9.1,4.5,10.2\n1.0,2.0,2021,1,1,0,0,0,1.0,1.0\n",
            STANDARD_HEADER
        );

        let rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(input.as_bytes());
        let mut out = Vec::new();
        let err = write_report(rdr, &mut out).unwrap_err();

        assert!(format!("{}", err).contains("row 3"));
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("2020/03/05 14:22:09.10"));
        assert!(!written.contains("2021/01/01"));
    }

    #[test]
    fn short_row_aborts() {
        let input = format!("{}\n34.05,-118.25,2020\n", STANDARD_HEADER);
        assert!(report_from(&input).is_err());
    }

    #[test]
    fn missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("no-such-catalog.csv");
        let output = dir.path().join("report.anss");

        let err = catalog_to_report(&input, &output).unwrap_err();

        assert!(format!("{}", err).contains("no-such-catalog.csv"));
        assert!(!output.exists());
    }

    #[test]
    fn conversion_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("catalog.csv");
        let output = dir.path().join("report.anss");
        fs::write(
            &input,
            format!(
                "{}\n34.05,-118.25,2020,3,5,14,22,9.1,4.5,10.2\n",
                STANDARD_HEADER
            ),
        )
        .unwrap();

        catalog_to_report(&input, &output).unwrap();
        let first = fs::read(&output).unwrap();
        catalog_to_report(&input, &output).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn partial_report_survives_mid_run_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("catalog.csv");
        let output = dir.path().join("report.anss");
        fs::write(
            &input,
            format!(
                "{}\n34.05,-118.25,2020,3,5,14,22,9.1,4.5,10.2\nbogus,0,0,0,0,0,0,0,0,0\n",
                STANDARD_HEADER
            ),
        )
        .unwrap();

        assert!(catalog_to_report(&input, &output).is_err());

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("Date       Time"));
        assert!(written.contains("2020/03/05 14:22:09.10"));
    }
}
