//! Loads a file into a `ByteBuffer` and prints it as a hex dump, followed by
//! its text view.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=growbuf=trace cargo run -p growbuf --example hexdump -- Cargo.toml
//! RUST_LOG=growbuf=debug cargo run -p growbuf --example hexdump -- --text notes.txt
//! ```

use std::process::ExitCode;

use growbuf::{ByteBuffer, FileMode};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut mode = FileMode::Binary;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--text" => mode = FileMode::Text,
            _ => path = Some(arg),
        }
    }
    let Some(path) = path else {
        eprintln!("usage: hexdump [--text] <path>");
        return ExitCode::FAILURE;
    };

    let buf = match ByteBuffer::from_file(&path, mode) {
        Ok(buf) => buf,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{} bytes, capacity {}", buf.len(), buf.capacity());
    println!("{}", buf.hex_dump());
    if let Some(nul) = buf.first_of(0) {
        println!("-- text (first NUL at offset {nul}) --");
    } else {
        println!("-- text --");
    }
    println!("{}", buf.text());
    ExitCode::SUCCESS
}
