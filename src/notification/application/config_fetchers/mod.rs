pub mod webhook_config_fetcher;
