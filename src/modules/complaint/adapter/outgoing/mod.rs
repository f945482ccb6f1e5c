pub mod complaint_query_postgres;
pub mod complaint_repository_postgres;
pub mod fs_image_store;
pub mod sea_orm_entity;
