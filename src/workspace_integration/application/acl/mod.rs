pub mod grpc_workspace_facade_impl;
