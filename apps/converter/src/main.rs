#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quiz_bank_converter::run().await
}
