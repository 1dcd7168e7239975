use anyhow::Result;

pub fn run(code: &str) -> Result<()> {
    olc::validate::validate(code)?;

    let kind = if olc::is_full(code) {
        "full"
    } else if olc::is_short(code) {
        "short"
    } else {
        "valid, outside the globe"
    };
    println!("{}: {}", code, kind);

    Ok(())
}
