//! Toggle the reader's relay outputs and read the state back.
//!
//! Usage: cargo run --example relay_control -- <host> <port>

use vf747::Reader;

#[tokio::main]
async fn main() -> vf747::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "192.168.1.190".to_string());
    let port = args.next().and_then(|p| p.parse().ok()).unwrap_or(6000);

    let mut reader = Reader::tcp(host, port);
    reader.connect().await?;

    reader.set_relay(true, false).await?;

    let state = reader.get_relay().await?;
    println!("relay1: {}, relay2: {}", state.relay1(), state.relay2());

    reader.set_relay(false, false).await?;
    reader.disconnect().await?;
    Ok(())
}
