use reqwest::blocking::Client;
use std::env;
use std::error::Error;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

const SPDF_URL: &str =
    "https://spdf.gsfc.nasa.gov/pub/data/pioneer/pioneer10/traj/jupiter/p10trjjup.asc";
const CACHE_FILE: &str = "p10trjjup.asc";
const CACHE_EXPIRATION_HOURS: u64 = 24 * 30; // Archive data changes at most on maintenance passes

fn main() {
    // Get Cargo's OUT_DIR (temporary build directory)
    let out_dir = env::var("OUT_DIR").expect("Cargo should set OUT_DIR");
    let cache_path = PathBuf::from(out_dir).join(CACHE_FILE);

    // Download and store the trajectory table
    match fetch_trajectory_data(&cache_path) {
        Ok(_) => println!("Trajectory data fetched successfully!"),
        Err(e) => {
            // An offline build still compiles; the runtime cache takes over.
            println!(
                "cargo:warning=Failed to fetch trajectory data: {}. Falling back to the runtime cache.",
                e
            );
            if !cache_path.exists() {
                File::create(&cache_path).expect("Failed to create placeholder trajectory file");
            }
        }
    }
}

fn fetch_trajectory_data(cache_path: &PathBuf) -> Result<(), Box<dyn Error>> {
    // Check last modified time of cache
    if let Ok(metadata) = fs::metadata(cache_path) {
        if let Ok(modified) = metadata.modified() {
            let now = SystemTime::now();
            let age = now.duration_since(modified).unwrap_or(Duration::ZERO);

            // Skip download if the cache is still fresh
            if age < Duration::from_secs(CACHE_EXPIRATION_HOURS * 3600) {
                eprintln!(
                    "Skipping download: Cached trajectory data is still fresh ({} hours old).",
                    age.as_secs() / 3600
                );
                return Ok(());
            }
        }
    }

    eprintln!("Fetching trajectory data from: {}", SPDF_URL);

    let client = Client::new();
    let response = client.get(SPDF_URL).send()?;
    let status = response.status();

    if !status.is_success() {
        return Err(format!("HTTP request failed: {}", status).into());
    }

    let bytes = response.bytes()?;
    eprintln!("Downloaded {} bytes of trajectory data.", bytes.len());

    let mut file = File::create(cache_path)?;
    file.write_all(&bytes)?;

    eprintln!("Trajectory data successfully written to {:?}", cache_path);
    Ok(())
}
