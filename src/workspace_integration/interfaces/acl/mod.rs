pub mod workspace_facade;
