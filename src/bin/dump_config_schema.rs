use anyhow::Result;

fn main() -> Result<()> {
    let schema = swift_doodle::Config::json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
