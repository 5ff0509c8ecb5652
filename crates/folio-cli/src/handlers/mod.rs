pub mod catalog_dump;
pub mod contact;
pub mod experience;
pub mod projects;
pub mod skills;
pub mod view;
