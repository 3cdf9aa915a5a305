pub mod db;
pub mod authorization {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod option_repository;
    pub mod repository;
}
pub mod wishlist {
    pub mod entity;
    pub mod repository;
}
