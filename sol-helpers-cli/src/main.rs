use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    sol_helpers_cli::run().await?;
    Ok(())
}
