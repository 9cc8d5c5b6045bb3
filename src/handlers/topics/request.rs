//! Topic request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_TOPIC_NAME_LENGTH;

/// Topic creation request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTopicRequest {
    #[validate(length(min = 1, max = MAX_TOPIC_NAME_LENGTH))]
    pub name: String,
}
