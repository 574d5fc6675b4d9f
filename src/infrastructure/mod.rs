pub mod json_files;
