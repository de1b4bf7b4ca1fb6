extern crate keylight_discover;

use clap::{App, Arg};

use keylight_discover::Accessory;

fn print_human(accessories: &[Accessory]) {
    println!("Looking for lights...");
    for accessory in accessories {
        println!("Got {} at {}", accessory.name(), accessory.address());
    }
    println!("Done");
}

fn print_json(accessories: &[Accessory]) {
    match serde_json::to_string(accessories) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("Could not serialize accessories: {}", err),
    }
}

fn main() {
    env_logger::init();

    let matches = App::new("Elgato Key Light discovery")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Rob Young <rob@robyoung.digital>")
        .about("List the Key Light accessories configured in Elgato Control Center.")
        .arg(Arg::with_name("json")
            .long("json")
            .takes_value(false)
            .help("Respond with JSON.")
        )
        .get_matches();

    let accessories = keylight_discover::discover();
    if matches.is_present("json") {
        print_json(&accessories);
    } else {
        print_human(&accessories);
    }
}
