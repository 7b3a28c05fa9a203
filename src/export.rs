//! CSV export of aggregated tables.

use std::path::Path;

use crate::analysis::AggregatedRow;
use crate::Result;

/// Write aggregated rows to `path` as UTF-8, comma-separated CSV with a
/// header row and no index column.
pub fn write_aggregated_csv(path: &Path, rows: &[AggregatedRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["player", "position", "value"])?;
    for row in rows {
        let value = row.value.to_string();
        writer.write_record([row.player.as_str(), row.position.as_str(), value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_rows() -> Vec<AggregatedRow> {
        vec![
            AggregatedRow {
                player: "Josh Allen".to_string(),
                position: "QB".to_string(),
                value: 402.0,
            },
            AggregatedRow {
                player: "Cooper Kupp".to_string(),
                position: "WR".to_string(),
                value: 294.5,
            },
        ]
    }

    #[test]
    fn test_export_writes_header_and_rows_without_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("agg.csv");

        write_aggregated_csv(&path, &sample_rows()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("player,position,value"));
        assert_eq!(lines.next(), Some("Josh Allen,QB,402"));
        assert_eq!(lines.next(), Some("Cooper Kupp,WR,294.5"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_round_trips_through_the_csv_reader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("agg.csv");
        let rows = sample_rows();

        write_aggregated_csv(&path, &rows).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let read_back: Vec<AggregatedRow> = reader
            .deserialize()
            .collect::<std::result::Result<_, csv::Error>>()
            .unwrap();
        assert_eq!(read_back, rows);
    }

    #[test]
    fn test_export_empty_table_still_writes_a_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_aggregated_csv(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "player,position,value");
    }
}
