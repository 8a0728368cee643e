//! Support code shared by the webserver integration tests

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
