//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    MAX_PASSWORD_LENGTH, MAX_PHONE_LENGTH, MAX_SCHOOL_LENGTH, MAX_STUDENT_ID_LENGTH,
    MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
};

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = MAX_USERNAME_LENGTH))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    #[validate(length(min = 1, max = MAX_SCHOOL_LENGTH))]
    pub school: String,

    #[validate(length(min = 1, max = MAX_STUDENT_ID_LENGTH))]
    pub student_id: String,

    #[validate(length(min = 1, max = MAX_PHONE_LENGTH))]
    pub phone: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}
