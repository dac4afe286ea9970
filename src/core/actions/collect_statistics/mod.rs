pub mod collect_statistics;
