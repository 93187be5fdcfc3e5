pub mod boot_sector;
pub mod scanner;
