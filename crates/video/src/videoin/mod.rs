use {
    crate::*,
    base::Vec2,
    image::Image,
    std::{
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
        thread,
        time::Duration,
    },
    tokio::{
        sync::oneshot,
        task::{JoinHandle, spawn_blocking},
    },
};

const REOPEN_DELAY: Duration = Duration::from_millis(100);

/// A blocking frame producer driven from a dedicated worker thread.
///
/// `open` and `blocking_capture` always run on the same OS thread, some
/// backends care.
pub trait VideoInDevice: Send {
    /// Open the device and return the negotiated frame size.
    fn open(&mut self) -> Result<Vec2<usize>, VideoError>;
    fn close(&mut self);
    fn blocking_capture(&mut self) -> Result<Image, VideoError>;
}

/// A running camera. Frames land in a `VideoSurface`; dropping or closing
/// the `VideoIn` stops the worker and releases the device.
pub struct VideoIn {
    surface: VideoSurface,
    cancel: Arc<AtomicBool>,
    size: Vec2<usize>,
    join_handle: Option<JoinHandle<()>>,
}

impl VideoIn {
    /// Open `device` on a worker thread and start filling the surface.
    ///
    /// Fails when the device cannot be opened (missing, busy, denied). Once
    /// open, capture errors never surface here: the worker clears the
    /// surface and keeps trying to reopen the device.
    pub async fn open(device: impl VideoInDevice + 'static) -> Result<Self, VideoError> {
        let (writer, surface) = VideoSurface::new();
        let cancel = Arc::new(AtomicBool::new(false));
        let (ready_tx, ready_rx) = oneshot::channel();

        let worker_cancel = Arc::clone(&cancel);
        let join_handle = spawn_blocking(move || run_worker(Box::new(device), writer, worker_cancel, ready_tx));

        let size = ready_rx
            .await
            .map_err(|_| VideoError::Channel("worker thread died during init".to_string()))??;
        log::info!("video in: opened at {}", size);

        Ok(Self {
            surface,
            cancel,
            size,
            join_handle: Some(join_handle),
        })
    }

    /// Size negotiated when the device was opened. The live size is on the surface.
    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn surface(&self) -> VideoSurface {
        self.surface.clone()
    }

    /// Stop the worker and wait until the device is released.
    pub async fn close(mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(join_handle) = self.join_handle.take() {
            if let Err(error) = join_handle.await {
                log::error!("video in: worker panicked: {}", error);
            }
        }
    }
}

impl Drop for VideoIn {
    fn drop(&mut self) {
        // the worker notices on its next capture
        self.cancel.store(true, Ordering::Relaxed);
    }
}

fn run_worker(
    mut device: Box<dyn VideoInDevice>,
    writer: SurfaceWriter,
    cancel: Arc<AtomicBool>,
    ready: oneshot::Sender<Result<Vec2<usize>, VideoError>>,
) {
    let opened = device.open();
    let failed = opened.is_err();
    let _ = ready.send(opened);
    if failed {
        return;
    }

    while !cancel.load(Ordering::Relaxed) {
        match device.blocking_capture() {
            Ok(frame) => writer.publish(frame),
            Err(error) => {
                log::warn!("video in: capture failed: {}", error);
                writer.clear();
                reopen(device.as_mut(), &cancel);
            }
        }
    }

    device.close();
    writer.clear();
}

// retry until the device opens again or the camera is shut down
fn reopen(device: &mut dyn VideoInDevice, cancel: &AtomicBool) {
    while !cancel.load(Ordering::Relaxed) {
        device.close();
        thread::sleep(REOPEN_DELAY);
        match device.open() {
            Ok(size) => {
                log::info!("video in: reopened at {}", size);
                return;
            }
            Err(error) => log::debug!("video in: reopen failed: {}", error),
        }
    }
}

#[cfg(feature = "v4l2")]
pub mod v4l2;
