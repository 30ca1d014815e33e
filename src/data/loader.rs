use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};

use super::model::Record;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load trade records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `[{ "title": ..., "buyPrice": ..., ... }, ...]` (the exporter's output)
/// * `.csv`  – header row with the same field names
///
/// Anything else is read as JSON.
pub fn load_file(path: &Path) -> Result<Vec<Record>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        _ => load_json(path),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// [
///   {
///     "title": "Adept's Bag",
///     "image": "https://.../T4_BAG.png",
///     "buyPrice": "1520",
///     "buyTimeAgo": "5 min ago",
///     "sellPrice": "2100",
///     "sellTimeAgo": "1 h ago",
///     "fromLocation": "Martlock",
///     "toLocation": "Caerleon",
///     "profit": "412",
///     "profitPercent": "27.1",
///     "soldPerDay": "38"
///   },
///   ...
/// ]
/// ```
///
/// Numbers may be JSON numbers or strings. Unknown keys are ignored.
fn load_json(path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

pub fn parse_json(text: &str) -> Result<Vec<Record>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let items = root
        .as_array()
        .context("Expected top-level JSON array")?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_object()
                .map(Record::from_json)
                .with_context(|| format!("Row {i} is not a JSON object"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with the JSON field names, one record per row.
/// Every cell goes through the same coercion as a JSON string value.
fn load_csv(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let obj: Map<String, JsonValue> = headers
            .iter()
            .zip(row.iter())
            .map(|(h, cell)| (h.clone(), JsonValue::String(cell.to_string())))
            .collect();

        records.push(Record::from_json(&obj));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const SWORD: &str = r#"[{"title":"Sword","buyPrice":"100","sellPrice":"150","profit":"50","profitPercent":"50","soldPerDay":"3","buyTimeAgo":"1h","sellTimeAgo":"2h","fromLocation":"A","toLocation":"B","image":"x.png"}]"#;

    #[test]
    fn test_load_single_record() {
        let file = write_temp(".json", SWORD);
        let records = load_file(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Sword");
        assert_eq!(records[0].buy_price, 100.0);
        assert_eq!(records[0].profit, 50.0);
        assert_eq!(records[0].from_location, "A");
    }

    #[test]
    fn test_order_preserved_and_extra_keys_ignored() {
        let records = parse_json(
            r#"[{"title":"b","extra":1},{"title":"a"},{"title":"b"}]"#,
        )
        .unwrap();
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_bom_is_skipped() {
        let records = parse_json("\u{feff}[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = parse_json("[{").unwrap_err();
        assert!(format!("{err:#}").contains("parsing JSON"));
    }

    #[test]
    fn test_non_array_is_error() {
        let err = parse_json(r#"{"title":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("top-level JSON array"));
    }

    #[test]
    fn test_non_object_row_is_error() {
        let err = parse_json(r#"[{"title":"x"}, 5]"#).unwrap_err();
        assert!(err.to_string().contains("Row 1"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(format!("{err:#}").contains("reading JSON file"));
    }

    #[test]
    fn test_load_csv() {
        let file = write_temp(
            ".csv",
            "title,buyPrice,sellPrice,profit,profitPercent,soldPerDay,fromLocation\n\
             Bag,10,15,5,50,2,Lymhurst\n\
             Cape,oops,,1,,x,Bridgewatch\n",
        );
        let records = load_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sell_price, 15.0);
        assert_eq!(records[0].from_location, "Lymhurst");
        assert_eq!(records[1].buy_price, 0.0);
        assert_eq!(records[1].sold_per_day, 0.0);
        assert_eq!(records[1].to_location, "");
    }
}
