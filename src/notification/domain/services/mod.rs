pub mod config_fetcher;
