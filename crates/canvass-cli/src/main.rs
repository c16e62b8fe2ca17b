use std::process;

#[tokio::main]
async fn main() {
    if let Err(err) = canvass_cli::run().await {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
