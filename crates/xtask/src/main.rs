use std::collections::BTreeMap;

use anyhow::Context;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `null` for normal dependencies, `"dev"` / `"build"` otherwise
    kind: Option<String>,
}

/// Dependencies a crate may not have (normal dependencies only)
fn forbidden(package: &str) -> &'static [&'static str] {
    match package {
        "personaforge-domain" => &[
            "reqwest",
            "tokio",
            "personaforge-shared",
            "personaforge-player",
        ],
        "personaforge-shared" => &["reqwest", "tokio", "personaforge-player"],
        _ => &[],
    }
}

fn violations(metadata: &Metadata) -> Vec<String> {
    let mut found = Vec::new();
    for package in &metadata.packages {
        let deny = forbidden(&package.name);
        for dep in &package.dependencies {
            if dep.kind.is_none() && deny.contains(&dep.name.as_str()) {
                found.push(format!("{} must not depend on {}", package.name, dep.name));
            }
        }
    }
    found
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut checked: BTreeMap<&str, usize> = BTreeMap::new();
    for package in &metadata.packages {
        checked.insert(&package.name, package.dependencies.len());
    }

    let found = violations(&metadata);
    if !found.is_empty() {
        for violation in &found {
            eprintln!("arch-check: {violation}");
        }
        anyhow::bail!("{} architecture violation(s)", found.len());
    }

    for (name, deps) in checked {
        println!("arch-check: {name} ok ({deps} deps)");
    }
    Ok(())
}
