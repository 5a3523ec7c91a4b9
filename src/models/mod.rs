pub mod dish_model;
