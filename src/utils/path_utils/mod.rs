mod dir_checks;
mod expansion;

pub use dir_checks::check_writable_dir;
