pub mod db;
pub mod grocery {
    pub mod entity;
    pub mod repository;
}
