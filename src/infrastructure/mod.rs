pub mod console;
pub mod console_runner;
pub mod display;
pub mod random;
pub mod storage;
