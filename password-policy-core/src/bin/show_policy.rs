use anyhow::Context;
use password_policy_core::{init, render_policy};

fn run() -> anyhow::Result<()> {
    let config = init().context("failed to load policy core configuration")?;
    println!("{}", render_policy(&config));
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
    }
}
