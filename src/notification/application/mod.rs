pub mod config_fetchers;
