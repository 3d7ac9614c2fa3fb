use adboard::server;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    server::run().await
}
