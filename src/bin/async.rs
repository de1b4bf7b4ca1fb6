use std::time::Duration;

use keylight_discover::tokio::discovery;

#[tokio::main]
async fn main() {
    env_logger::init();

    println!("Looking for lights...");
    for accessory in discovery::with_timeout(Duration::from_secs(2)).await {
        println!("Got {} at {}", accessory.name(), accessory.address());
    }
    println!("Done");
}
