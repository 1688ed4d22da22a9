use crate::domain::{
    food_analysis::value_objects::ImagePayload, profile::entities::Gender,
    session::entities::ImageSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitProfileInput {
    pub email: String,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectImageInput {
    pub image: ImagePayload,
    pub source: ImageSource,
}
