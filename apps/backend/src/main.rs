#[tokio::main]
async fn main() -> anyhow::Result<()> {
    js_training_backend::run().await
}
