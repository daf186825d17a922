//! Offline analysis of exported blobworld statistics.

/// Markdown report over selected statistic columns
pub mod report;
