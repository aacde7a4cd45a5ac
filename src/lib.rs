extern crate env_logger;
extern crate log;
extern crate rand;
extern crate rayon;

pub mod data;
pub mod rendering;
