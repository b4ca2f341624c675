// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod business_finder;
pub mod employee_filter;
pub mod lead_service;
pub mod subscription_gateway;
