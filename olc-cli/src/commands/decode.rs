use anyhow::{Context, Result};
use olc::CodeArea;
use serde::Serialize;

#[derive(Serialize)]
struct DecodeResponse<'a> {
    code: &'a str,
    #[serde(flatten)]
    area: CodeArea,
    center_lat: f64,
    center_lon: f64,
}

pub fn run(code: &str, json: bool) -> Result<()> {
    let area = olc::decode(code).with_context(|| format!("Failed to decode {}", code))?;
    let (center_lat, center_lon) = area.center_degrees();

    if json {
        let response = DecodeResponse {
            code,
            area,
            center_lat,
            center_lon,
        };
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    let degrees = |v: i32| v as f64 / olc::OLC_DEG_MULTIPLIER as f64;
    println!("Code:        {}", code.to_ascii_uppercase());
    println!("Length:      {}", area.code_length);
    println!(
        "South-west:  {:.7}, {:.7}",
        degrees(area.south),
        degrees(area.west)
    );
    println!(
        "North-east:  {:.7}, {:.7}",
        degrees(area.north),
        degrees(area.east)
    );
    println!("Center:      {:.7}, {:.7}", center_lat, center_lon);

    Ok(())
}
