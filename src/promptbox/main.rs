mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = cli::commands::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
