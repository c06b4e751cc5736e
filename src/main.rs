fn main() -> anyhow::Result<()> {
    pathwise_lib::run()?;
    Ok(())
}
