#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wscan_cli::run().await
}
