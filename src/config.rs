/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub elevator: ElevatorConfig,
}

#[derive(Deserialize, Clone)]
pub struct ElevatorConfig {
    pub min_floor: i32,
    pub max_floor: i32,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, String> {
    let config_str =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    toml::from_str(&config_str).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

/***************************************/
/*             Unit tests              */
/***************************************/
