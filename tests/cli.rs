use clap::Parser;
use netaddr::cli::{run, Args, CliError};

fn run_with(argv: &[&str]) -> (Result<(), CliError>, String) {
    let args = Args::try_parse_from(std::iter::once("netaddr").chain(argv.iter().copied()))
        .expect("arguments should parse");
    let mut out = Vec::new();
    let result = run(args, &mut out);
    (result, String::from_utf8(out).expect("reports are utf-8"))
}

#[test]
fn inspect_v4() -> anyhow::Result<()> {
    let (result, out) = run_with(&["inspect", "0.0.0.0", "127.0.0.1"]);
    result?;
    assert_eq!(out, "0.0.0.0\tIPv4\tunspecified\n127.0.0.1\tIPv4\tloopback\n");
    Ok(())
}

#[test]
fn sort_v4() -> anyhow::Result<()> {
    let (result, out) = run_with(&["sort", "10.0.0.2", "9.255.255.255", "10.0.0.2"]);
    result?;
    assert_eq!(out, "9.255.255.255\n10.0.0.2\n10.0.0.2\n");

    let (result, out) = run_with(&["sort", "--unique", "10.0.0.2", "9.255.255.255", "10.0.0.2"]);
    result?;
    assert_eq!(out, "9.255.255.255\n10.0.0.2\n");
    Ok(())
}

#[test]
fn sort_rejects_invalid_input() {
    let (result, out) = run_with(&["sort", "10.0.0.1", "not_an_address"]);
    assert!(matches!(result, Err(CliError::Address(e)) if e.is_parse_failure()));
    assert!(out.is_empty());
}

#[cfg(feature = "ipv6")]
#[test]
fn sort_puts_v4_first() -> anyhow::Result<()> {
    let (result, out) = run_with(&["sort", "-u", "::1", "255.255.255.255", "::", "0.0.0.0", "::1"]);
    result?;
    assert_eq!(out, "0.0.0.0\n255.255.255.255\n::\n::1\n");
    Ok(())
}

#[cfg(feature = "ipv6")]
#[test]
fn inspect_v6() -> anyhow::Result<()> {
    let (result, out) = run_with(&["inspect", "::1", "::FFFF:10.0.0.1"]);
    result?;
    assert_eq!(out, "::1\tIPv6\tloopback\n::ffff:10.0.0.1\tIPv6\tv4-mapped\n");
    Ok(())
}
