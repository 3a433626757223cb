//! Low-stock alert fan-out to administrators.

mod service;

#[cfg(test)]
mod tests;

pub use service::NotificationService;
