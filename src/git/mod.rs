pub mod branch;
pub mod commit;
pub mod parse;
pub mod status;
pub mod status_code;
pub mod status_file;
