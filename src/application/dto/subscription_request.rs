// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateSubscriptionDto {
    #[validate(length(min = 1, message = "plan_id cannot be empty"))]
    pub plan_id: String,
    #[validate(url(message = "return_url is invalid"))]
    pub return_url: String,
    #[validate(url(message = "cancel_url is invalid"))]
    pub cancel_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SubscriptionStatusQuery {
    #[validate(length(min = 1, message = "subscription_id cannot be empty"))]
    pub subscription_id: String,
}
