use macroquad::prelude::Conf;

mod app;
mod constants;
mod controls;
mod gameplay;
mod hud;
mod render;
mod state;
mod viewport;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    if let Err(err) = app::run().await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
