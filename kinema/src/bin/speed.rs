//! Speed calculator binary.
//!
//! Computes the speed of the default scenario (12 m in 4 s) and prints it:
//!
//! ```bash
//! $ cargo run --bin speed
//! Speed: 3 m/s
//! ```
//!
//! No arguments or environment variables are read. Log events go to stderr at `WARN` and above, so stdout holds
//! only the report line.

use std::io;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use kinema::{speed_line, Scenario};

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let speed = Scenario::default().speed();
    println!("{}", speed_line(speed));

    Ok(())
}
