use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub upload_dir: PathBuf,
    pub pointer_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let upload_dir =
            PathBuf::from(env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()));

        let pointer_file = env::var("POINTER_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| upload_dir.join("master_pointer.txt"));

        Self {
            server_addr,
            upload_dir,
            pointer_file,
        }
    }
}
