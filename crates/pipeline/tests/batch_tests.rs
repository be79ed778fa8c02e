use {image::EncodedFrame, pipeline::BatchAccumulator};

fn frame(n: u8) -> EncodedFrame {
    EncodedFrame::from_jpeg(&[0xFF, 0xD8, n])
}

#[test]
fn test_no_flush_below_batch_size() {
    let mut accumulator = BatchAccumulator::new(10);
    for n in 0..9 {
        assert!(accumulator.append(frame(n)).is_none());
    }
    assert_eq!(accumulator.len(), 9);
}

#[test]
fn test_nth_frame_flushes_exactly_once_and_resets() {
    let mut accumulator = BatchAccumulator::new(10);
    for n in 0..9 {
        accumulator.append(frame(n));
    }

    let batch = accumulator.append(frame(9)).unwrap();

    assert_eq!(batch.len(), 10);
    assert!(accumulator.is_empty());
    assert!(accumulator.append(frame(10)).is_none());
    assert_eq!(accumulator.len(), 1);
}

#[test]
fn test_batch_keeps_capture_order() {
    let mut accumulator = BatchAccumulator::new(3);
    accumulator.append(frame(1));
    accumulator.append(frame(2));
    let batch = accumulator.append(frame(3)).unwrap();
    assert_eq!(batch.frames(), &[frame(1), frame(2), frame(3)]);
}

#[test]
fn test_consecutive_batches_are_independent() {
    let mut accumulator = BatchAccumulator::new(2);
    let flushed: Vec<_> = (0..7).filter_map(|n| accumulator.append(frame(n))).collect();
    assert_eq!(flushed.len(), 3);
    assert_eq!(flushed[1].frames(), &[frame(2), frame(3)]);
    assert_eq!(accumulator.len(), 1);
}

#[test]
fn test_zero_batch_size_is_one() {
    let mut accumulator = BatchAccumulator::new(0);
    assert_eq!(accumulator.batch_size(), 1);
    assert_eq!(accumulator.append(frame(0)).unwrap().len(), 1);
}
