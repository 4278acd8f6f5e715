#![allow(dead_code)]

pub mod csv_fixture;
