use csv::StringRecord;
use failure::Fail;

use crate::columns::ColumnMap;

/// Report column titles, written once at the top of the output
pub const BANNER: &str = "Date       Time             Lat       Lon  Depth   Mag \n";
/// Separator rule written under the banner
pub const RULE: &str =
    "------------------------------------------------------\n";

#[derive(Debug, Fail)]
/// Errors that can occur while formatting one catalog record
pub enum EntryError {
    #[fail(display = "record has {} fields, column {} ({}) is out of range", len, index, name)]
    MissingField {
        name: &'static str,
        index: usize,
        len: usize,
    },
    #[fail(display = "couldn't parse '{}' in column {} as a number", value, name)]
    BadNumber { name: &'static str, value: String },
}

/// Format one catalog record into a fixed-width report entry.
///
/// Layout: `DATE TIME LAT(8) LON(9) DEPTH(6) MAG(5)`, numeric fields
/// right-justified, single space between columns, newline-terminated.
pub fn format_entry(record: &StringRecord, cols: &ColumnMap) -> Result<String, EntryError> {
    let date = format!(
        "{}/{}/{}",
        field(record, cols.year, "ORI_YEAR")?,
        zfill2(field(record, cols.month, "ORI_MONTH")?),
        zfill2(field(record, cols.day, "ORI_DAY")?),
    );

    let second = float_field(record, cols.second, "ORI_SECOND")?;
    let time = format!(
        "{}:{}:{:05.2}",
        zfill2(field(record, cols.hour, "ORI_HOUR")?),
        zfill2(field(record, cols.minute, "ORI_MINUTE")?),
        round_to(second, 2),
    );

    let lat = fmt_rounded(float_field(record, cols.lat, "LAT")?, 4);
    let lon = fmt_rounded(float_field(record, cols.lon, "LONG")?, 4);
    let depth = fmt_rounded(float_field(record, cols.depth, "DEPTH")?, 2);
    let mag = fmt_rounded(float_field(record, cols.mag, "MAG")?, 2);

    Ok(format!(
        "{} {} {:>8} {:>9} {:>6} {:>5}\n",
        date, time, lat, lon, depth, mag
    ))
}

fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    name: &'static str,
) -> Result<&'r str, EntryError> {
    record.get(index).ok_or(EntryError::MissingField {
        name,
        index,
        len: record.len(),
    })
}

fn float_field(record: &StringRecord, index: usize, name: &'static str) -> Result<f64, EntryError> {
    let raw = field(record, index, name)?;
    raw.trim().parse().map_err(|_| EntryError::BadNumber {
        name,
        value: raw.to_string(),
    })
}

/// Left-pad a raw field with zeros to a width of 2
fn zfill2(s: &str) -> String {
    format!("{:0>2}", s)
}

/// Round at `places` decimal places, halves away from zero
fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}

/// Round `v` at `places` decimal places and render it in the shortest
/// decimal form that keeps at least one fractional digit, so trailing
/// zeros are dropped (`10.20` -> `10.2`) but whole values keep their
/// decimal point (`10.0`, not `10`).
fn fmt_rounded(v: f64, places: i32) -> String {
    let mut s = format!("{}", round_to(v, places));
    if !s.contains('.') && !s.contains("inf") && !s.contains("NaN") {
        s.push_str(".0");
    }
    s
}
