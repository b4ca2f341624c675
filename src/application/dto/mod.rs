// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod lead_request;
pub mod lead_response;
pub mod subscription_request;
