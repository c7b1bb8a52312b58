mod serve_file;

pub use serve_file::serve_file_handler;
