#![allow(dead_code)]

pub mod predictor_env;
pub mod stub_server;
