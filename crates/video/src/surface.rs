use {
    base::Vec2,
    image::Image,
    tokio::sync::watch,
};

/// A live raster that can be sampled at any moment.
///
/// The dimensions may change between two reads when the stream renegotiates
/// its resolution. A zero size means nothing has been delivered yet.
pub trait VideoSource: Send + Sync {
    fn size(&self) -> Vec2<usize>;

    /// Copy out the current picture, or `None` if the surface is not ready.
    fn snapshot(&self) -> Option<Image>;
}

/// Read side of a latest-frame slot. Cheap to clone.
#[derive(Clone)]
pub struct VideoSurface {
    receiver: watch::Receiver<Option<Image>>,
}

/// Write side of a latest-frame slot, owned by whoever produces frames.
pub struct SurfaceWriter {
    sender: watch::Sender<Option<Image>>,
}

impl VideoSurface {
    pub fn new() -> (SurfaceWriter, VideoSurface) {
        let (sender, receiver) = watch::channel(None);
        (SurfaceWriter { sender }, VideoSurface { receiver })
    }

    /// Wait for the next published frame. Returns false once the writer is gone.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}

impl VideoSource for VideoSurface {
    fn size(&self) -> Vec2<usize> {
        self.receiver
            .borrow()
            .as_ref()
            .map(|image| image.size)
            .unwrap_or_default()
    }

    fn snapshot(&self) -> Option<Image> {
        self.receiver
            .borrow()
            .as_ref()
            .filter(|image| !image.size.is_empty())
            .cloned()
    }
}

impl SurfaceWriter {
    /// Replace the current picture. Readers only ever see the latest one.
    pub fn publish(&self, image: Image) {
        self.sender.send_replace(Some(image));
    }

    /// Mark the surface as not ready (device closed or reconnecting).
    pub fn clear(&self) {
        self.sender.send_replace(None);
    }

    pub fn subscribe(&self) -> VideoSurface {
        VideoSurface {
            receiver: self.sender.subscribe(),
        }
    }
}
