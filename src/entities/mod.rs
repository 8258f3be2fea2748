pub mod artist;
pub mod artist_content;
pub mod owner;
