#[cfg(test)]
pub mod impl_fake;
pub mod impl_snapshot;
pub mod interface;
