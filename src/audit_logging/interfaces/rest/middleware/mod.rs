pub mod audited_operation_middleware;
