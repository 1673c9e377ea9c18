use anyhow::Result;

fn main() -> Result<()> {
    let spec = rashinban::rashinban::openapi();
    println!("{}", spec.to_pretty_json()?);
    Ok(())
}
