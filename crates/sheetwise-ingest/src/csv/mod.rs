//! CSV reading and writing.

mod convert;
mod decode;
mod reader;
mod writer;

pub use convert::any_to_value;
pub use decode::decode_to_utf8;
pub(crate) use reader::file_display_name;
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_bytes,
    read_csv_dataset,
};
pub use writer::{write_csv, write_csv_to};
