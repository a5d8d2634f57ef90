use anyhow::Result;

fn main() -> Result<()> {
    dercor::run()?;
    Ok(())
}
