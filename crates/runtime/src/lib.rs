mod config;
pub mod logging;

pub use config::{
    BATCH_FLAGS, BATCH_INTERPRETER, BATCH_SCRIPT, LIST_SEPARATOR, OUTPUT_FILE_NAME, PROGRAM_NAME,
    default_list_root, output_path, own_executable_name,
};

pub use logging::init;
