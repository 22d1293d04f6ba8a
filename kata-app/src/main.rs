//! # Kata Application (Binary)
//!
//! Main executable entry point.

fn main() -> anyhow::Result<()> {
    kata_app::main()
}
