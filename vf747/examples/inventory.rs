//! Enumerate tags in the field through a serial device server.
//!
//! Usage: cargo run --example inventory -- <host> <port>

use vf747::{MemoryBank, Reader};

#[tokio::main]
async fn main() -> vf747::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "192.168.1.190".to_string());
    let port = args.next().and_then(|p| p.parse().ok()).unwrap_or(6000);

    let mut reader = Reader::tcp(host, port);
    reader.connect().await?;

    let version = reader.get_reader_version().await?;
    println!("Reader version: {version}");

    let inventory = reader.list_tag_id(MemoryBank::Epc, 0, 0, &[]).await?;
    println!("{inventory}");
    for tag in &inventory.tags {
        println!("  {tag}");
    }
    if !inventory.is_complete() {
        println!("  (inventory truncated, page reader memory for the rest)");
    }

    reader.disconnect().await?;
    Ok(())
}
