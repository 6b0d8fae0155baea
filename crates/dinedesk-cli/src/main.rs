#[tokio::main]
async fn main() {
    std::process::exit(dinedesk_cli::run().await);
}
