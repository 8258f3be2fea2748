pub mod artist_content;
pub mod artists;
pub mod owners;
