mod panel;

use {
    anyhow::Result,
    base::Vec2,
    minifb::{Key, Window, WindowOptions},
    overlay::{OverlayRenderer, SharedCanvas},
    panel::Panel,
    pipeline::{Pipeline, PipelineConfig},
    video::{VideoError, VideoIn, VideoSource, VideoSurface},
};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;
const FRAME_RATE: f32 = 30.0;

#[cfg(feature = "v4l2")]
async fn open_camera() -> Result<VideoIn, VideoError> {
    use video::v4l2::{V4l2, V4l2Config};
    let config = V4l2Config {
        size: Some(Vec2::new(WIDTH, HEIGHT)),
        frame_rate: Some(FRAME_RATE),
        ..Default::default()
    };
    VideoIn::open(V4l2::new(config)).await
}

#[cfg(not(feature = "v4l2"))]
async fn open_camera() -> Result<VideoIn, VideoError> {
    VideoIn::open(video::PatternDevice::new(Vec2::new(WIDTH, HEIGHT), FRAME_RATE)).await
}

/// Current camera frame with the keypoint overlay on top, packed for minifb.
fn compose(surface: &VideoSurface, canvas: &SharedCanvas) -> Option<(Vec2<usize>, Vec<u32>)> {
    let frame = surface.snapshot()?;
    let rgb = match frame.to_rgb() {
        Ok(rgb) => rgb,
        Err(e) => {
            log::warn!("cannot display frame: {}", e);
            return None;
        }
    };
    let mut buffer = image::rgb_to_u32(rgb.size, &rgb.data);
    let canvas = canvas.lock();
    if canvas.size() == rgb.size {
        canvas.composite_onto(&mut buffer);
    }
    Some((rgb.size, buffer))
}

#[tokio::main]
async fn main() -> Result<()> {
    match std::env::var("LOG_DIR") {
        Ok(dir) => base::init_file_logger(dir)?,
        Err(_) => base::init_stdout_logger(),
    }

    let config = PipelineConfig::from_env();
    println!("Pose Overlay");
    println!("Backend: {}", config.backend_url);
    println!("Controls: ESC to exit");
    println!();

    // without a camera the window stays blank and no batches are sent
    let camera = match open_camera().await {
        Ok(camera) => Some(camera),
        Err(e) => {
            log::error!("error accessing camera: {}", e);
            None
        }
    };
    let surface = match &camera {
        Some(camera) => camera.surface(),
        None => VideoSurface::new().1,
    };

    let canvas = SharedCanvas::new(Vec2::new(WIDTH, HEIGHT));
    let handle = Pipeline::new(config, surface.clone(), canvas.clone())?.start();
    let mut predictions = handle.subscribe();

    let mut panel = Panel::default();
    for line in panel.lines() {
        println!("{}", line);
    }

    let mut window = Window::new(
        "Pose Overlay - ESC to exit",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )?;
    window.set_target_fps(FRAME_RATE as usize);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if let Some(classification) = predictions.try_recv() {
            panel.update(classification);
            println!();
            for line in panel.lines() {
                println!("{}", line);
            }
        }

        match compose(&surface, &canvas) {
            Some((size, buffer)) => window.update_with_buffer(&buffer, size.x, size.y)?,
            None => window.update(),
        }
    }

    println!("Exiting...");
    handle.stop().await;
    if let Some(camera) = camera {
        camera.close().await;
    }
    Ok(())
}
