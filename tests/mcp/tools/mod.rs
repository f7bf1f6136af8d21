mod analytics;
mod config;
mod translate;
