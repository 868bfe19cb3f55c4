pub mod workspace_record;
