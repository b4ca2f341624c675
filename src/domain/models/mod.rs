// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod business;
pub mod contact;
pub mod employee_range;
pub mod geo;
