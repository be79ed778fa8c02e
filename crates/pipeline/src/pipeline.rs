use {
    crate::*,
    base::{Epoch, EpochToken, Vec2},
    com::{Batch, InferenceBackend, InferenceClient, InferenceResponse},
    overlay::{KeypointTracker, OverlayRenderer},
    std::sync::Arc,
    tokio::{
        sync::mpsc,
        task::JoinHandle,
        time::{self, MissedTickBehavior},
    },
    video::VideoSource,
};

// Everything that touches the tracker or the overlay goes through this
// queue, so there is exactly one writer.
enum Update {
    Resize(Vec2<usize>),
    Response(InferenceResponse),
}

/// A configured, not yet running pipeline.
pub struct Pipeline<S, R, B = InferenceClient> {
    config: PipelineConfig,
    source: Arc<S>,
    renderer: R,
    backend: Arc<B>,
}

impl<S, R> Pipeline<S, R, InferenceClient>
where
    S: VideoSource + 'static,
    R: OverlayRenderer + 'static,
{
    /// Build a pipeline that talks to the HTTP service at `config.backend_url`.
    pub fn new(config: PipelineConfig, source: S, renderer: R) -> Result<Self, PipelineError> {
        let backend = InferenceClient::with_timeout(&config.backend_url, config.request_timeout)?;
        log::info!("inference endpoint: {}", backend.endpoint());
        Ok(Self {
            config,
            source: Arc::new(source),
            renderer,
            backend: Arc::new(backend),
        })
    }
}

impl<S, R, B> Pipeline<S, R, B>
where
    S: VideoSource + 'static,
    R: OverlayRenderer + 'static,
    B: InferenceBackend,
{
    /// Replace the inference backend.
    pub fn with_backend<C: InferenceBackend>(self, backend: Arc<C>) -> Pipeline<S, R, C> {
        Pipeline {
            config: self.config,
            source: self.source,
            renderer: self.renderer,
            backend,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Start the capture timer and the overlay task. Must be called from
    /// within a tokio runtime.
    pub fn start(self) -> PipelineHandle {
        let session = Epoch::new().token();
        let broadcaster = ResultBroadcaster::new();
        let (updates, queue) = mpsc::unbounded_channel();

        log::info!(
            "pipeline started: batches of {}, one frame every {:?}",
            self.config.batch_size,
            self.config.capture_interval
        );

        let apply = tokio::spawn(apply_loop(
            self.renderer,
            queue,
            broadcaster.clone(),
            session.clone(),
        ));

        let capture = tokio::spawn(capture_loop(
            self.config,
            self.source,
            self.backend,
            updates,
            session.clone(),
        ));

        PipelineHandle {
            broadcaster,
            session,
            capture: Some(capture),
            apply: Some(apply),
        }
    }
}

/// A running pipeline. Stops when `stop` is called or the handle is dropped.
pub struct PipelineHandle {
    broadcaster: ResultBroadcaster,
    session: EpochToken,
    capture: Option<JoinHandle<()>>,
    apply: Option<JoinHandle<()>>,
}

impl PipelineHandle {
    /// Listen for classification results.
    pub fn subscribe(&self) -> Subscription {
        self.broadcaster.subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_live()
            && self.capture.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the capture timer and wait for both tasks to wind down.
    ///
    /// Requests already in flight are not cancelled; whatever they return
    /// afterwards is ignored.
    pub async fn stop(mut self) {
        self.shutdown();
        for task in [self.capture.take(), self.apply.take()].into_iter().flatten() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    log::error!("pipeline task failed: {}", e);
                }
            }
        }
    }

    fn shutdown(&mut self) {
        if self.session.end() {
            log::info!("pipeline stopped");
        }
        if let Some(task) = &self.capture {
            task.abort();
        }
        if let Some(task) = &self.apply {
            task.abort();
        }
    }
}

impl Drop for PipelineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn capture_loop<S, B>(
    config: PipelineConfig,
    source: Arc<S>,
    backend: Arc<B>,
    updates: mpsc::UnboundedSender<Update>,
    session: EpochToken,
) where
    S: VideoSource + 'static,
    B: InferenceBackend,
{
    let encoder = FrameEncoder::new(config.jpeg_quality);
    let mut accumulator = BatchAccumulator::new(config.batch_size);
    let mut ticker = time::interval(config.capture_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if !session.is_live() {
            break;
        }

        let Some(image) = source.snapshot() else {
            log::debug!("video surface not ready, skipping tick");
            continue;
        };
        let size = image.size;

        let encoded = tokio::task::spawn_blocking(move || encoder.encode(&image)).await;
        let frame = match encoded {
            Ok(Ok(frame)) => frame,
            Ok(Err(e)) => {
                log::warn!("failed to encode frame: {}", e);
                continue;
            }
            Err(e) => {
                log::error!("encoder task failed: {}", e);
                continue;
            }
        };

        if updates.send(Update::Resize(size)).is_err() {
            break;
        }

        if let Some(batch) = accumulator.append(frame) {
            tokio::spawn(dispatch(
                backend.clone(),
                batch,
                updates.clone(),
                session.clone(),
            ));
        }
    }
}

// Fire and forget: the capture loop never waits on this.
async fn dispatch<B: InferenceBackend>(
    backend: Arc<B>,
    batch: Batch,
    updates: mpsc::UnboundedSender<Update>,
    session: EpochToken,
) {
    let frames = batch.len();
    let result = backend.infer(batch).await;

    if !session.is_live() {
        log::debug!("discarding inference response that arrived after teardown");
        return;
    }

    match result {
        Ok(response) => {
            log::debug!("inference response for {} frames: {:?}", frames, response);
            let _ = updates.send(Update::Response(response));
        }
        Err(e) => log::error!("dropping batch of {} frames: {}", frames, e),
    }
}

async fn apply_loop<R: OverlayRenderer>(
    mut renderer: R,
    mut queue: mpsc::UnboundedReceiver<Update>,
    broadcaster: ResultBroadcaster,
    session: EpochToken,
) {
    let mut tracker = KeypointTracker::new();

    while let Some(update) = queue.recv().await {
        if !session.is_live() {
            break;
        }
        match update {
            Update::Resize(size) => renderer.resize(size),
            Update::Response(response) => {
                apply_response(&mut tracker, &mut renderer, &broadcaster, &response)
            }
        }
    }
}

fn apply_response<R: OverlayRenderer>(
    tracker: &mut KeypointTracker,
    renderer: &mut R,
    broadcaster: &ResultBroadcaster,
    response: &InferenceResponse,
) {
    if let Some(keypoints) = response.keypoints() {
        match tracker.reconcile(keypoints) {
            Ok(ops) => {
                for op in &ops {
                    renderer.execute(op);
                }
            }
            Err(e) => log::warn!("ignoring keypoints: {}", e),
        }
    }

    match response.classification() {
        Some(classification) => {
            let listeners = broadcaster.publish(classification);
            log::debug!("classification sent to {} listeners", listeners);
        }
        None => match response.message() {
            Some(message) => log::info!("{}", message),
            None => log::info!("no predictions received"),
        },
    }
}
