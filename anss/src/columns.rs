use log::trace;

/// Zero-based column index for each recognized catalog header name.
///
/// A name that never appears in the header keeps its default index of 0,
/// so an absent column silently aliases whatever sits in the first column.
/// That fallback is part of the report contract and is kept as-is.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ColumnMap {
    pub lat: usize,
    pub lon: usize,
    pub year: usize,
    pub month: usize,
    pub day: usize,
    pub hour: usize,
    pub minute: usize,
    pub second: usize,
    pub mag: usize,
    pub depth: usize,
}

impl ColumnMap {
    /// Scan a header record left to right and record the index of every
    /// recognized name. Matching is on the trimmed field text, exact and
    /// case-sensitive; unrecognized names are skipped silently.
    pub fn from_header(hdr: &csv::StringRecord) -> Self {
        let mut map = ColumnMap::default();

        for (i, col) in hdr.iter().enumerate() {
            match col.trim() {
                "LAT" => map.lat = i,
                "LONG" => map.lon = i,
                "ORI_YEAR" => map.year = i,
                "ORI_MONTH" => map.month = i,
                "ORI_DAY" => map.day = i,
                "ORI_HOUR" => map.hour = i,
                "ORI_MINUTE" => map.minute = i,
                "ORI_SECOND" => map.second = i,
                "MAG" => map.mag = i,
                "DEPTH" => map.depth = i,
                other => trace!("skipping unrecognized column '{}'", other),
            }
        }

        map
    }
}
