pub mod csv_reader;
pub mod error;
pub mod frame;

pub use csv_reader::read_movies;
pub use error::{IngestError, Result};
pub use frame::{any_to_string, format_numeric, parse_f64, parse_i64, read_movies_frame};
