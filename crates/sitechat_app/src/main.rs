mod app;
mod config;
mod effects;
mod input;
mod logging;
mod render;

fn main() {
    let config = config::Config::from_env();
    if let Err(err) = app::run(config) {
        eprintln!("sitechat failed: {err}");
        std::process::exit(1);
    }
}
