#[tokio::main]
async fn main() {
    if let Err(e) = medspa_care_lib::run().await {
        tracing::error!("Fatal: {e}");
        eprintln!("medspa-care: {e}");
        std::process::exit(1);
    }
}
