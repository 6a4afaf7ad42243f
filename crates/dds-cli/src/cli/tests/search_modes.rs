//! Tests for the search subcommands.

use super::parse;
use crate::cli::{CliCommand, OutputArg, SafeSearchArg, TimelimitArg};
use clap::Parser;

#[test]
fn text_defaults() {
    match parse(&["dds", "text", "-k", "rust"]) {
        CliCommand::Text { search, download } => {
            assert_eq!(search.keywords, "rust");
            assert!(search.region.is_none());
            assert_eq!(search.safesearch, SafeSearchArg::Moderate);
            assert!(search.timelimit.is_none());
            assert_eq!(search.max_results, 20);
            assert_eq!(search.output, OutputArg::Print);
            assert!(search.proxy.is_none());
            assert!(!search.no_verify);
            assert!(!download.download);
            assert!(download.threads.is_none());
        }
        _ => panic!("expected Text"),
    }
}

#[test]
fn text_keywords_are_required() {
    assert!(crate::cli::Cli::try_parse_from(["dds", "text"]).is_err());
}

#[test]
fn text_download_with_threads() {
    match parse(&["dds", "text", "-k", "rust", "--download", "--threads", "4"]) {
        CliCommand::Text { download, .. } => {
            assert!(download.download);
            assert_eq!(download.threads, Some(4));
        }
        _ => panic!("expected Text with download"),
    }
}

#[test]
fn text_full_options() {
    match parse(&[
        "dds", "text", "-k", "rust lang", "-r", "us-en", "-s", "off", "-t", "w", "-m", "50",
        "-o", "json", "-p", "tb", "--no-verify",
    ]) {
        CliCommand::Text { search, .. } => {
            assert_eq!(search.keywords, "rust lang");
            assert_eq!(search.region.as_deref(), Some("us-en"));
            assert_eq!(search.safesearch, SafeSearchArg::Off);
            assert_eq!(search.timelimit, Some(TimelimitArg::W));
            assert_eq!(search.max_results, 50);
            assert_eq!(search.output, OutputArg::Json);
            assert_eq!(search.proxy.as_deref(), Some("tb"));
            assert!(search.no_verify);
        }
        _ => panic!("expected Text"),
    }
}

#[test]
fn images_filters() {
    match parse(&[
        "dds",
        "images",
        "-k",
        "crabs",
        "--size",
        "Large",
        "--color",
        "Red",
        "--type-image",
        "photo",
        "--layout",
        "Square",
        "--license-image",
        "any",
        "-d",
    ]) {
        CliCommand::Images {
            download, filters, ..
        } => {
            assert!(download.download);
            assert_eq!(filters.size.as_deref(), Some("Large"));
            assert_eq!(filters.color.as_deref(), Some("Red"));
            assert_eq!(filters.type_image.as_deref(), Some("photo"));
            assert_eq!(filters.layout.as_deref(), Some("Square"));
            assert_eq!(filters.license_image.as_deref(), Some("any"));
        }
        _ => panic!("expected Images"),
    }
}

#[test]
fn images_rejects_unknown_size() {
    assert!(
        crate::cli::Cli::try_parse_from(["dds", "images", "-k", "x", "--size", "Enormous"])
            .is_err()
    );
}

#[test]
fn news_has_no_download_flag() {
    assert!(crate::cli::Cli::try_parse_from(["dds", "news", "-k", "x", "--download"]).is_err());
    match parse(&["dds", "news", "-k", "x", "-o", "csv"]) {
        CliCommand::News { search } => assert_eq!(search.output, OutputArg::Csv),
        _ => panic!("expected News"),
    }
}

#[test]
fn videos_filters() {
    match parse(&[
        "dds",
        "videos",
        "-k",
        "crabs",
        "--resolution",
        "high",
        "--duration",
        "short",
        "--license-videos",
        "youtube",
    ]) {
        CliCommand::Videos { filters, .. } => {
            assert_eq!(filters.resolution.as_deref(), Some("high"));
            assert_eq!(filters.duration.as_deref(), Some("short"));
            assert_eq!(filters.license_videos.as_deref(), Some("youtube"));
        }
        _ => panic!("expected Videos"),
    }
}
