pub mod download;
pub mod fs;
pub mod probe;
pub mod shim;
