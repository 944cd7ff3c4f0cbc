pub fn run() -> anyhow::Result<()> {
    println!("research-history {}", env!("CARGO_PKG_VERSION"));
    println!("Append-only research topic history in a JSON file");
    Ok(())
}
