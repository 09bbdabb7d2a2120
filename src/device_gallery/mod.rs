#[cfg(test)]
pub mod impl_fake;
pub mod impl_prompt;
pub mod interface;
