pub mod complaint_images;
pub mod complaints;
