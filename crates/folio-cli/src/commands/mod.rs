pub mod sitemap;
pub mod verify;
