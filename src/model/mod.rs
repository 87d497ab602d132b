pub mod api;
pub mod event;
pub mod user;

#[cfg(test)]
mod tests;
