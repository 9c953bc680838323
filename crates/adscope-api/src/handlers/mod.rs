pub mod ad;
pub mod analysis;
pub mod brand;
pub mod competitor;
pub mod drive;
pub mod health;
pub mod job;
