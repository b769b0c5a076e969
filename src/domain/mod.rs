pub mod audit;
pub mod borrower;
pub mod category;
pub mod isbn;
pub mod library_site;
pub mod media;
pub mod media_number;
pub mod media_type;
pub mod school_year;
pub mod types;
