pub mod db;
pub mod error;
pub mod export;
pub mod image;
pub mod import;
pub mod question;
pub mod tableau;

#[cfg(test)]
pub(crate) mod test_support;
