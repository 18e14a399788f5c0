mod common;
mod domain;
mod evaluation;
