use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_info() {
    match parse(&["ytbs", "info", "https://youtu.be/abc"]) {
        CliCommand::Info { url, download } => {
            assert_eq!(url, "https://youtu.be/abc");
            assert!(!download);
        }
        _ => panic!("expected Info"),
    }
}

#[test]
fn cli_parse_info_download() {
    match parse(&["ytbs", "info", "--download", "https://youtu.be/abc"]) {
        CliCommand::Info { download, .. } => assert!(download),
        _ => panic!("expected Info"),
    }
}

#[test]
fn cli_parse_download_many() {
    match parse(&["ytbs", "download", "https://a", "https://b"]) {
        CliCommand::Download { urls } => assert_eq!(urls, vec!["https://a", "https://b"]),
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_requires_url() {
    assert!(Cli::try_parse_from(["ytbs", "download"]).is_err());
}

#[test]
fn cli_parse_load_info() {
    match parse(&["ytbs", "load-info", "video.info.json"]) {
        CliCommand::LoadInfo { path } => assert_eq!(path, Path::new("video.info.json")),
        _ => panic!("expected LoadInfo"),
    }
}

#[test]
fn cli_parse_version() {
    match parse(&["ytbs", "version"]) {
        CliCommand::Version => {}
        _ => panic!("expected Version"),
    }
}
