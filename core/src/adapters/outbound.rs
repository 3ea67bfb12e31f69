pub mod memory_sink;
pub mod writer_sink;
