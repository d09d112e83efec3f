use anyhow::Context;
use log::info;
use minifb::{Key, Scale, Window, WindowOptions};

use crate::film::Film;

/// Shows `film` and blocks until the window is closed or Escape is pressed.
pub fn show_blocking(film: &Film<u32>, title: &str) -> anyhow::Result<()> {
    let mut window = Window::new(
        title,
        film.width,
        film.height,
        WindowOptions {
            scale: Scale::X1,
            ..WindowOptions::default()
        },
    )
    .context("failed to open plot window")?;

    // nothing animates, so a slow refresh is plenty
    window.limit_update_rate(Some(std::time::Duration::from_millis(33)));

    info!("showing plot, close the window or press escape to exit");
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&film.buffer, film.width, film.height)
            .context("failed to update plot window")?;
    }
    Ok(())
}
