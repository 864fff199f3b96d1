//! Integration tests for ip-analyzer
//!
//! These tests drive the public API from input text to rendered output.

use clap::Parser;
use ip_analyzer::cli::Cli;
use ip_analyzer::models::{Address, HostCount, Ipv6Scope};
use ip_analyzer::{analyze, run, Analyzer, AppError};
use std::io::Cursor;

fn run_with(args: &[&str], stdin: &str) -> Result<String, AppError> {
    let mut argv = vec!["ip-analyzer", "--no-color"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("Failed to parse args");
    let mut out = Vec::new();
    run(&cli, Cursor::new(stdin.to_string()), &mut out, false)?;
    Ok(String::from_utf8(out).expect("Output not utf8"))
}

#[test]
fn test_private_class_c() {
    let report = analyze("192.168.178.0/24").expect("Failed to analyze");
    assert_eq!(report.network.to_string(), "192.168.178.0");
    assert_eq!(report.netmask.to_string(), "255.255.255.0");
    assert_eq!(report.broadcast.unwrap().to_string(), "192.168.178.255");
    assert_eq!(report.first_host.to_string(), "192.168.178.1");
    assert_eq!(report.last_host.to_string(), "192.168.178.254");
    assert_eq!(report.num_hosts, HostCount::Finite(254));
    assert!(report.private);
}

#[test]
fn test_private_class_a() {
    let report = analyze("10.0.0.1/8").expect("Failed to analyze");
    assert_eq!(report.network.to_string(), "10.0.0.0");
    assert_eq!(report.broadcast.unwrap().to_string(), "10.255.255.255");
    assert!(report.private);
}

#[test]
fn test_public_address() {
    assert!(!analyze("8.8.8.8/24").expect("Failed to analyze").private);
}

#[test]
fn test_single_host() {
    let report = analyze("192.168.0.1/32").expect("Failed to analyze");
    assert_eq!(report.network.to_string(), "192.168.0.1");
    assert_eq!(report.first_host.to_string(), "192.168.0.1");
    assert_eq!(report.last_host.to_string(), "192.168.0.1");
    assert_eq!(report.num_hosts, HostCount::Finite(1));
}

#[test]
fn test_ipv6_documentation_prefix() {
    let report = analyze("2001:db8::1/64").expect("Failed to analyze");
    assert_eq!(
        report.ip.to_string(),
        "2001:0db8:0000:0000:0000:0000:0000:0001"
    );
    assert_eq!(report.num_hosts, HostCount::Unbounded);
    assert_eq!(report.broadcast, None);
}

#[test]
fn test_ipv6_loopback_is_global() {
    let report = analyze("::1/128").expect("Failed to analyze");
    assert_eq!(report.scope, Some(Ipv6Scope::Global));
    assert_eq!(report.num_hosts, HostCount::Finite(1));
}

#[test]
fn test_invalid_inputs() {
    for bad in [
        "256.0.0.1",
        "192.168.0",
        "192.168.0.1.2",
        "192.168.0.1/33",
        "1:2:3:4:5:6:7",
        "1:2:3:4:5:6:7:8:9",
        "1::2::3",
    ] {
        assert!(analyze(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn test_network_idempotent() {
    for input in ["203.0.113.77", "10.20.30.40", "2001:db8:aa:bb::cc"] {
        let addr: Address = input.parse().expect("Failed to parse");
        for len in 0..=addr.max_length() {
            let network = Analyzer::from_parts(addr, len).unwrap().network();
            let again = Analyzer::from_parts(network, len).unwrap().network();
            assert_eq!(network, again, "{input}/{len}");
        }
    }
}

#[test]
fn test_broadcast_matches_std() {
    for len in 0..=32u8 {
        let analyzer = Analyzer::new(&format!("172.20.33.44/{len}")).unwrap();
        let bits = u32::from(std::net::Ipv4Addr::new(172, 20, 33, 44));
        let mask = if len == 0 { 0 } else { u32::MAX << (32 - len) };
        let expected = Address::from(std::net::Ipv4Addr::from(bits | !mask));
        assert_eq!(analyzer.broadcast(), Some(expected), "/{len}");
    }
}

#[test]
fn test_run_table_from_argument() {
    let out = run_with(&["192.168.178.0/24"], "").expect("run failed");
    assert!(out.contains("IP Analysis Results"));
    assert!(out.contains("Broadcast Address   192.168.178.255"));
    assert!(out.contains("Usable IP Range     192.168.178.1 - 192.168.178.254"));
    assert!(out.contains("Number of Hosts     254"));
}

#[test]
fn test_run_json_from_stdin() {
    let out = run_with(&["--format", "json"], "fe80::1/64\n").expect("run failed");
    let value: serde_json::Value = serde_json::from_str(&out).expect("Invalid JSON");
    assert_eq!(value["scope"], "Link-Local");
    assert_eq!(value["prefix"], 64);
    assert_eq!(value["private"], false);
}

#[test]
fn test_run_csv() {
    let out = run_with(&["--format", "csv", "10.0.0.1/30"], "").expect("run failed");
    assert!(out.starts_with("\"field\",\"value\",\"binary\""));
    assert!(out.contains("\"Number of Hosts\",\"2\",\"\""));
}

#[test]
fn test_run_errors() {
    let err = run_with(&["300.1.1.1/8"], "").unwrap_err();
    assert!(matches!(err, AppError::Format(_)));
    assert!(matches!(run_with(&[], ""), Err(AppError::NoInput)));
}
