use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    std::path::PathBuf,
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture, video::capture::Parameters,
    },
};

const BUFFER_COUNT: u32 = 4;

/// Stream formats the pipeline can consume directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum V4l2Format {
    Yuyv,
    Jpeg,
}

impl V4l2Format {
    fn fourcc(self) -> FourCC {
        match self {
            V4l2Format::Yuyv => FourCC::new(b"YUYV"),
            V4l2Format::Jpeg => FourCC::new(b"MJPG"),
        }
    }

    fn from_fourcc(fourcc: FourCC) -> Option<Self> {
        match &fourcc.repr {
            b"YUYV" => Some(V4l2Format::Yuyv),
            b"MJPG" => Some(V4l2Format::Jpeg),
            _ => None,
        }
    }

    fn pixel_format(self) -> PixelFormat {
        match self {
            V4l2Format::Yuyv => PixelFormat::Yuyv,
            V4l2Format::Jpeg => PixelFormat::Jpeg,
        }
    }
}

/// What to ask the driver for. Unset fields keep the device's current setting.
#[derive(Debug, Clone, Default)]
pub struct V4l2Config {
    /// Device node; `/dev/video0` when unset.
    pub path: Option<PathBuf>,
    pub size: Option<Vec2<usize>>,
    pub format: Option<V4l2Format>,
    pub frame_rate: Option<f32>,
}

/// A V4L2 webcam read through memory-mapped buffers.
pub struct V4l2 {
    config: V4l2Config,
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: V4l2Format,
}

impl V4l2 {
    pub fn new(config: V4l2Config) -> Self {
        Self {
            config,
            stream: None,
            size: Vec2::default(),
            format: V4l2Format::Yuyv,
        }
    }

    // ask for the configured format; the driver may substitute its own
    fn negotiate(&self, device: &Device) -> Result<(Vec2<usize>, V4l2Format), VideoError> {
        let current = Capture::format(device)?;
        let size = self
            .config
            .size
            .unwrap_or(Vec2::new(current.width as usize, current.height as usize));
        let fourcc = self.config.format.map_or(current.fourcc, V4l2Format::fourcc);

        let chosen = Capture::set_format(device, &Format::new(size.x as u32, size.y as u32, fourcc))?;
        let format = V4l2Format::from_fourcc(chosen.fourcc).ok_or_else(|| {
            VideoError::Device(format!("camera only offers unsupported format {}", chosen.fourcc))
        })?;
        Ok((Vec2::new(chosen.width as usize, chosen.height as usize), format))
    }
}

impl VideoInDevice for V4l2 {
    fn open(&mut self) -> Result<Vec2<usize>, VideoError> {
        self.stream = None;

        let device = match &self.config.path {
            Some(path) => Device::with_path(path)?,
            None => Device::new(0)?,
        };
        (self.size, self.format) = self.negotiate(&device)?;

        if let Some(frame_rate) = self.config.frame_rate {
            Capture::set_params(&device, &Parameters::with_fps(frame_rate as u32))?;
        }

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
            .map_err(|error| VideoError::Stream(error.to_string()))?;
        self.stream = Some(stream);
        Ok(self.size)
    }

    fn close(&mut self) {
        self.stream = None;
    }

    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| VideoError::Stream("device is not open".to_string()))?;
        let (data, _) = CaptureStream::next(stream)
            .map_err(|error| VideoError::Stream(error.to_string()))?;
        Ok(Image::new(self.size, data.to_vec(), self.format.pixel_format()))
    }
}
