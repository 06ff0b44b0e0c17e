pub mod app;
pub mod browser;
pub mod cli;
pub mod config;
pub mod facet;
pub mod filter;
pub mod output;
pub mod pagination;
pub mod record;
pub mod source;

#[cfg(test)]
mod tests;
