fn main() {
    if let Err(err) = station_uptime::app::run() {
        eprintln!("station uptime computation failed: {err}");
        println!("ERROR");
        std::process::exit(1);
    }
}
