//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` locally.

use std::env;
use std::process::{Command, Stdio};

use anyhow::{bail, Context};

const DEFAULT_PORT: u16 = 8000;

fn parse_port(raw: Option<&str>) -> anyhow::Result<u16> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("SKETCH_PORT={raw:?} is not a port number")),
        None => Ok(DEFAULT_PORT),
    }
}

fn main() -> anyhow::Result<()> {
    let port = parse_port(env::var("SKETCH_PORT").ok().as_deref())?;

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => bail!(
            "wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/)."
        ),
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    println!("Serving static/ at http://127.0.0.1:{port} …");
    let port_arg = port.to_string();
    let status = Command::new("python3")
        .args(["-m", "http.server", port_arg.as_str(), "--directory", "static"])
        .stdout(Stdio::null())
        .status()
        .context("failed to start http server (is python3 installed?)")?;
    if !status.success() {
        bail!("http server exited with {status}");
    }
    Ok(())
}
