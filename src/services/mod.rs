pub mod dish_filter;
pub mod dish_loader;
pub mod dish_projection;
pub mod dish_service;
pub mod tagging_service;
