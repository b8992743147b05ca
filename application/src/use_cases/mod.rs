//! Use cases (application services)

pub mod draw_items;
pub mod reset_history;

#[cfg(test)]
pub(crate) mod test_support;
