pub mod console_interface;
pub mod core;
pub mod levels;
pub mod logging;
pub mod models;

#[cfg(test)]
mod test;
