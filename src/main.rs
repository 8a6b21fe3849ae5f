#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = longevity::cli::run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
