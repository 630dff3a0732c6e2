use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "cityflight".to_owned(),
        window_width: 1280,
        window_height: 720,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    cityflight_web_lib::run().await;
}
