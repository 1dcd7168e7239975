use anyhow::{Context, Result};
use olc::OlcCodec;
use serde::Serialize;

#[derive(Serialize)]
struct EncodeResponse {
    lat: f64,
    lon: f64,
    length: usize,
    code: String,
    url: String,
}

pub fn run(length: usize, lat: f64, lon: f64, url: bool, json: bool) -> Result<()> {
    let codec = OlcCodec::builder()
        .code_length(length)
        .build()
        .context("Invalid code length")?;

    let code = codec
        .encode_degrees(lat, lon)
        .context("Failed to encode coordinate")?;

    if json {
        let response = EncodeResponse {
            lat,
            lon,
            length,
            url: olc::maps_url(&code),
            code,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else if url {
        println!("{}", olc::maps_url(&code));
    } else {
        println!("{}", code);
    }

    Ok(())
}
