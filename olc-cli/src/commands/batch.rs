use anyhow::{bail, Context, Result};
use geojson::GeoJson;
use indicatif::{ProgressBar, ProgressStyle};
use olc::geojson::{tag_feature, tag_geojson};
use olc::OlcCodec;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Column appended to CSV output.
const CODE_COLUMN: &str = "plus_code";

pub fn run(
    length: usize,
    input: PathBuf,
    output: Option<PathBuf>,
    lat_col: String,
    lon_col: String,
) -> Result<()> {
    let codec = OlcCodec::builder()
        .code_length(length)
        .build()
        .context("Invalid code length")?;

    let output_path = output.unwrap_or_else(|| default_output_path(&input));

    let format = file_format(&input)?;
    let reader = File::open(&input).context("Failed to open input file")?;
    let writer = File::create(&output_path).context("Failed to create output file")?;

    let written = match format {
        Format::Csv => process_csv(&codec, reader, writer, &lat_col, &lon_col)?,
        Format::GeoJson => process_geojson(&codec, reader, writer)?,
    };

    println!(
        "Encoded {} records. Output written to: {}",
        written,
        output_path.display()
    );
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Format {
    Csv,
    GeoJson,
}

fn file_format(input: &Path) -> Result<Format> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => Ok(Format::Csv),
        "geojson" | "json" => Ok(Format::GeoJson),
        _ => bail!(
            "Unsupported file format: {}. Use .csv or .geojson",
            extension
        ),
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_pluscode.{}", stem, extension))
}

fn progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Append a `plus_code` column to every row. Returns the number of rows written.
fn process_csv<R: Read, W: Write>(
    codec: &OlcCodec,
    input: R,
    output: W,
    lat_col: &str,
    lon_col: &str,
) -> Result<usize> {
    let mut reader = csv::Reader::from_reader(BufReader::new(input));

    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == lon_col)
        .with_context(|| format!("Column '{}' not found in CSV", lon_col))?;

    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let pb = progress_bar(records.len() as u64)?;

    let mut writer = csv::Writer::from_writer(BufWriter::new(output));
    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push(CODE_COLUMN);
    writer.write_record(&new_headers)?;

    for (line, record) in records.iter().enumerate() {
        let lat: f64 = record
            .get(lat_idx)
            .context("Missing latitude")?
            .trim()
            .parse()
            .with_context(|| format!("Invalid latitude on row {}", line + 1))?;
        let lon: f64 = record
            .get(lon_idx)
            .context("Missing longitude")?
            .trim()
            .parse()
            .with_context(|| format!("Invalid longitude on row {}", line + 1))?;

        let code = codec
            .encode_degrees(lat, lon)
            .with_context(|| format!("Failed to encode row {}", line + 1))?;

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&code);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    Ok(records.len())
}

/// Tag every feature with its Plus Code(s). Returns the number of features tagged.
fn process_geojson<R: Read, W: Write>(codec: &OlcCodec, input: R, output: W) -> Result<usize> {
    let geojson: GeoJson =
        serde_json::from_reader(BufReader::new(input)).context("Failed to parse GeoJSON")?;
    let length = codec.code_length();

    let (result, tagged) = match geojson {
        GeoJson::FeatureCollection(mut fc) => {
            let pb = progress_bar(fc.features.len() as u64)?;
            let mut tagged = 0;
            for feature in &mut fc.features {
                if tag_feature(feature, length)? {
                    tagged += 1;
                }
                pb.inc(1);
            }
            pb.finish_with_message("done");
            (GeoJson::FeatureCollection(fc), tagged)
        }
        other => tag_geojson(other, length)?,
    };

    let mut writer = BufWriter::new(output);
    serde_json::to_writer_pretty(&mut writer, &result)?;
    writer.flush()?;

    Ok(tagged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn codec(length: usize) -> OlcCodec {
        OlcCodec::builder().code_length(length).build().unwrap()
    }

    #[test]
    fn test_file_format() {
        assert_eq!(file_format(Path::new("points.CSV")).unwrap(), Format::Csv);
        assert_eq!(file_format(Path::new("a.json")).unwrap(), Format::GeoJson);
        assert_eq!(file_format(Path::new("a.geojson")).unwrap(), Format::GeoJson);
        assert!(file_format(Path::new("a.txt")).is_err());
        assert!(file_format(Path::new("noext")).is_err());
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/points.csv")),
            PathBuf::from("/data/points_pluscode.csv")
        );
        assert_eq!(
            default_output_path(Path::new("trail.geojson")),
            PathBuf::from("trail_pluscode.geojson")
        );
    }

    #[test]
    fn test_process_csv() {
        let input = "name,lat,lon\nmerida,20.3700625,2.7821875\nzurich,47.0000625,8.0000625\n";
        let mut output = Vec::new();

        let rows = process_csv(&codec(10), input.as_bytes(), &mut output, "lat", "lon").unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "name,lat,lon,plus_code");
        assert_eq!(lines[1], "merida,20.3700625,2.7821875,7FG49QCJ+2V");
        assert_eq!(lines[2], "zurich,47.0000625,8.0000625,8FVC2222+22");
    }

    #[test]
    fn test_process_csv_custom_columns() {
        let input = "y,x\n0.5,-179.5\n";
        let mut output = Vec::new();
        process_csv(&codec(4), input.as_bytes(), &mut output, "y", "x").unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("0.5,-179.5,62G20000+"));
    }

    #[test]
    fn test_process_csv_missing_column() {
        let input = "latitude,lon\n1,1\n";
        let err = process_csv(&codec(10), input.as_bytes(), Vec::new(), "lat", "lon").unwrap_err();
        assert!(err.to_string().contains("Column 'lat' not found"));
    }

    #[test]
    fn test_process_csv_bad_value() {
        let input = "lat,lon\nabc,1\n";
        let err = process_csv(&codec(10), input.as_bytes(), Vec::new(), "lat", "lon").unwrap_err();
        assert!(err.to_string().contains("Invalid latitude on row 1"));
    }

    #[test]
    fn test_process_geojson_collection() {
        let input = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [2.775, 20.375]}},
                {"type": "Feature", "properties": {}, "geometry": null}
            ]
        }"#;
        let mut output = Vec::new();

        let tagged = process_geojson(&codec(6), input.as_bytes(), &mut output).unwrap();
        assert_eq!(tagged, 1);

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(
            value["features"][0]["properties"]["plus_code"],
            "7FG49Q00+"
        );
    }

    #[test]
    fn test_process_geojson_bare_geometry() {
        let input = r#"{"type": "LineString", "coordinates": [[-179.5, 0.5], [181.0, 1.0]]}"#;
        let mut output = Vec::new();

        let tagged = process_geojson(&codec(4), input.as_bytes(), &mut output).unwrap();
        assert_eq!(tagged, 1);

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["type"], "Feature");
        assert_eq!(
            value["properties"]["plus_codes"],
            serde_json::json!(["62G20000+", "62H30000+"])
        );
    }

    #[test]
    fn test_run_writes_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("points.csv");
        fs::write(&input, "lat,lon\n20.375,2.775\n").unwrap();

        run(
            6,
            input.clone(),
            None,
            "lat".to_string(),
            "lon".to_string(),
        )
        .unwrap();

        let output = fs::read_to_string(dir.path().join("points_pluscode.csv")).unwrap();
        assert!(output.contains("20.375,2.775,7FG49Q00+"));
    }

    #[test]
    fn test_run_rejects_invalid_length() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("points.csv");
        fs::write(&input, "lat,lon\n1,1\n").unwrap();

        assert!(run(9, input, None, "lat".to_string(), "lon".to_string()).is_err());
    }
}
